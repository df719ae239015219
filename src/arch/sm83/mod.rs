//! Sharp SM83, the Game Boy's CPU core.
//!
//! SM83 has a single instruction encoding, so its decoding context is always
//! empty.

mod context;

pub use context::{architectural_ctxt_parse, initial_context};
