//! Types which locate code in memory along with the context needed to decode
//! it.

mod cptr;

pub use cptr::{Pointer, PointerParseError};
