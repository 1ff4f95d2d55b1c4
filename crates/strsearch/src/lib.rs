// String search engines
// Exact substring search (KMP) and Lua-style pattern matching over raw bytes

#[cfg(test)]
mod test;

pub mod byteset;
pub mod config;
pub mod error;
pub mod kmp;
pub mod limits;
pub mod pattern;

pub use byteset::{ByteSet, check_set};
pub use config::MatchConfig;
pub use error::{Error, ErrorKind, Result};
pub use kmp::{Cursor, find, find_all, replace, replace_all, split};
pub use pattern::{Capture, GMatch, LuaPattern, Match, gmatch, gsub, str_find, str_match};
