// Test module organization
pub mod test_engines;
pub mod test_find;
#[cfg(feature = "serde")]
pub mod test_serde;
