//! Types which model context registers: named pieces of processor-mode state
//! that decide how instruction bytes are decoded.

mod context;
mod error;

pub use context::{ContextValues, DecodingContext};
pub use error::{Error, Result};
