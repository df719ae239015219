//! ARM, formerly an acronym of Acorn RISC Machine, and a quite popular ISA.
//!
//! This only covers 32-bit ARM, now known as AArch32, whose decoding context
//! is a single register selecting between the ARM and THUMB encodings.

mod context;

pub use context::{architectural_ctxt_parse, initial_context, InstructionSet, THUMB_MODE};
