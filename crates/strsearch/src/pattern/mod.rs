// Lua pattern matching: byte-oriented, zero-AST design
//
// Operates on `&[u8]`; every byte is a "character".
//
// 1. NO AST / parse phase: the pattern is interpreted directly during matching
//    (a validation pass runs once when a `LuaPattern` is built)
// 2. Capture stack grows on demand, capped at `MAXCAPTURES`
// 3. Captures are copied out of the subject before they are returned
// 4. Recursion is limited to prevent stack overflow on pathological patterns

mod capture;
mod class;
mod engine;
mod gsub;
mod lua_pattern;

pub use capture::{Capture, Match};
pub use class::match_class;
pub use gsub::gsub;
pub use lua_pattern::{GMatch, LuaPattern, gmatch, is_plain_pattern, start_offset, str_find, str_match};
