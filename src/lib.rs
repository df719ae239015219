//! Decoding contexts for disassemblers.
//!
//! Some processors decode the same bytes differently depending on mode state
//! that the bytes themselves do not encode, such as the ARM/THUMB selection on
//! AArch32. A `reg::DecodingContext` carries that state alongside a decoder,
//! `memory::Pointer` ties it to the address it applies to, and the `analysis`
//! module lets a decoder hand a context on to each successor of an instruction
//! and memoize what it decoded under each context.

#[macro_use]
extern crate serde_plain;

pub mod analysis;
pub mod arch;
pub mod memory;
pub mod reg;

pub use memory::Pointer;
pub use reg::{ContextValues, DecodingContext};
