//! Processor architectures whose decoding contexts this crate knows about.
//!
//! Each architecture is implemented as a child module to this one. At a bare
//! minimum, an architecture provides two functions:
//!
//!  * `initial_context` - The context decoding starts from before anything in
//!    the program has changed processor mode.
//!  * `architectural_ctxt_parse` - Recognizes the architecture's context
//!    specifiers in user input and injects them into a context.
//!
//! The full catalog of register names belongs to the decoder; only the
//! context registers are named here.

pub mod aarch32;
pub mod sm83;

use crate::reg::DecodingContext;
use serde::Serialize;
use std::str;

/// Enumeration of all architectures with known decoding contexts.
#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq, Hash)]
pub enum ArchName {
    SM83,
    AARCH32,
}

impl ArchName {
    /// The context a decoder should start from for this architecture.
    pub fn initial_context(self) -> DecodingContext {
        match self {
            ArchName::SM83 => sm83::initial_context(),
            ArchName::AARCH32 => aarch32::initial_context(),
        }
    }

    /// Inject this architecture's contexts from a user-specified context
    /// slice, shortening the slice by whatever was recognized.
    pub fn architectural_ctxt_parse(
        self,
        context_slice: &mut &[&str],
        context: &mut DecodingContext,
    ) {
        match self {
            ArchName::SM83 => sm83::architectural_ctxt_parse(context_slice, context),
            ArchName::AARCH32 => aarch32::architectural_ctxt_parse(context_slice, context),
        }
    }
}

impl str::FromStr for ArchName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "sm83" => Ok(ArchName::SM83),
            "lr35902" => Ok(ArchName::SM83),
            "gbz80" => Ok(ArchName::SM83),
            "arm" => Ok(ArchName::AARCH32),
            "arm32" => Ok(ArchName::AARCH32),
            "aarch32" => Ok(ArchName::AARCH32),
            _ => Err(()),
        }
    }
}

derive_deserialize_from_str!(ArchName, "valid architecture name");
