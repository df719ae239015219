//! Architectural context parsing stub

use crate::reg::DecodingContext;

pub fn initial_context() -> DecodingContext {
    DecodingContext::new()
}

/// Inject SM83 architectural contexts into a user-specified context.
///
/// SM83 defines no architectural contexts, so this function does nothing.
pub fn architectural_ctxt_parse(_context_slice: &mut &[&str], _context: &mut DecodingContext) {}
