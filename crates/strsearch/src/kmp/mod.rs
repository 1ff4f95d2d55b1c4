// Exact substring search: Knuth-Morris-Pratt over raw bytes
//
// The failure table is built once per cursor; the cursor can be rewound to
// any offset and resumed without rebuilding it. `find_all` keeps the
// automaton state between hits (overlapping), while `replace_all` and
// `split` rewind past every hit (non-overlapping).

mod cursor;
mod ops;

pub use cursor::{Cursor, failure_table};
pub use ops::{find, find_all, replace, replace_all, split};
