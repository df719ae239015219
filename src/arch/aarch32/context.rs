//! Context injection for AArch32

use crate::reg::{DecodingContext, Error, Result};
use tracing::trace;

/// The context register which selects THUMB decoding.
pub const THUMB_MODE: &str = "TMReg";

/// The instruction encodings an AArch32 processor can decode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InstructionSet {
    /// 32-bit ARM encoding, `TMReg = 0`.
    Arm,

    /// 16/32-bit THUMB encoding, `TMReg = 1`.
    Thumb,
}

impl InstructionSet {
    /// Determine which encoding a context selects.
    ///
    /// Contexts without a THUMB mode register are an error, as is any mode
    /// value other than zero or one.
    pub fn from_context(context: &DecodingContext) -> Result<Self> {
        match context.get_context_value(THUMB_MODE)? {
            0 => Ok(InstructionSet::Arm),
            1 => Ok(InstructionSet::Thumb),
            value => {
                trace!(value, "rejected AArch32 THUMB mode value");
                Err(Error::InvalidMode {
                    register: THUMB_MODE.to_string(),
                    value,
                })
            }
        }
    }

    pub fn mode_value(self) -> u64 {
        match self {
            InstructionSet::Arm => 0,
            InstructionSet::Thumb => 1,
        }
    }

    /// Produce a copy of a context that selects this encoding.
    pub fn apply(self, context: &DecodingContext) -> DecodingContext {
        context.put_context_reg(THUMB_MODE, self.mode_value())
    }
}

/// The context AArch32 code starts decoding in.
///
/// Processors come out of reset in ARM state.
pub fn initial_context() -> DecodingContext {
    InstructionSet::Arm.apply(&DecodingContext::new())
}

fn recognize_context(ctxt_str: &str, context: &mut DecodingContext) -> Option<()> {
    let isa = match ctxt_str {
        "T" => InstructionSet::Thumb,
        "A" => InstructionSet::Arm,
        _ => return None,
    };

    trace!(?isa, "injecting AArch32 architectural context");
    context.update_context_reg(THUMB_MODE, isa.mode_value());

    Some(())
}

/// Inject ARM architectural contexts into a user-specified context.
///
/// The following context specifiers will be recognized as architectural
/// context and injected into the given context:
///
///  * T: Indicates that code should be disassembled in THUMB mode.
///  * A: Indicates that code should be disassembled in ARM mode.
///
/// This function recognizes architectural contexts that are specified at the
/// start or end of the context block of user input. In other words, AArch32
/// architectural contexts must be specified before or after all platform
/// contexts. Any contexts recognized by this function will be indicated by
/// shortening the slice handed to it.
///
/// For example, the following are valid ways to specify that code at a
/// particular address is THUMB code:
///
///  * `T:80001A60` (Context slice is shortened to zero length)
///  * `160:T:A0C0A320` (Context slice is shortened to [..1])
///  * `T:2A:8000AAAA` (Context slice is shortened to [1..])
///
/// While the following will not be treated as an AArch32 platform context:
///
///  * `2:T:24:A0320002` (Context slice is returned as is)
pub fn architectural_ctxt_parse(context_slice: &mut &[&str], context: &mut DecodingContext) {
    while let Some(ctxt_str) = context_slice.first() {
        if recognize_context(ctxt_str, context).is_none() {
            break;
        }

        *context_slice = &context_slice[1..];
    }

    while let Some(ctxt_str) = context_slice.last() {
        if recognize_context(ctxt_str, context).is_none() {
            break;
        }

        *context_slice = &context_slice[..context_slice.len() - 1];
    }
}
