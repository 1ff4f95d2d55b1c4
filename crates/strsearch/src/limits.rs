//! Centralized limits and constants for both search engines.
//!
//! All magic numbers that bound engine behavior are collected here
//! for easy tuning. Runtime overrides go through [`crate::MatchConfig`].

// ===== Pattern Matching =====

/// Maximum number of live captures in one top-level match attempt.
pub const MAXCAPTURES: usize = 256;

/// Maximum match recursion depth for pattern matching.
pub const MAXCCALLS: usize = 200;

/// Hard ceiling on any configured recursion budget. Each level costs a few
/// stack frames, so this stays well inside a 2 MiB thread stack.
pub const MAXCCALLS_LIMIT: usize = 1_000;

/// Escape byte introducing classes, backreferences, `%b` and `%f`.
pub const L_ESC: u8 = b'%';

/// Bytes with a special meaning somewhere in a pattern.
pub const SPECIALS: &[u8] = b"^$*+?.([%-";

// ===== Results =====

/// Maximum length of any buffer built by replace / gsub.
/// Lengths are 32-bit in the host value system.
pub const MAX_STRING_SIZE: usize = i32::MAX as usize;

/// Initial capacity of the capture stack; grows up to [`MAXCAPTURES`].
pub const CAPTURE_STACK_INIT: usize = 8;
