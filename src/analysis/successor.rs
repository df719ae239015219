//! Successor context resolution

use crate::memory::Pointer;
use crate::reg::DecodingContext;
use std::fmt;
use tracing::debug;

/// A decoder's relation between successor addresses and the context decoding
/// should resume in at each of them.
///
/// When a decoder finishes an instruction it hands back a `ContextMap` rather
/// than a single context. Straight-line code and direct branches usually map
/// every successor to the same context, but an indirect jump on AArch32 may
/// land in THUMB or ARM code depending on the low bit of the target, which
/// only the map can decide once the target is known.
pub trait ContextMap<P> {
    fn context_for(&self, successor: &P) -> DecodingContext;
}

impl<P, F> ContextMap<P> for F
where
    F: Fn(&P) -> DecodingContext,
{
    fn context_for(&self, successor: &P) -> DecodingContext {
        self(successor)
    }
}

/// A context map which gives every successor the same context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniformContextMap {
    context: DecodingContext,
}

impl UniformContextMap {
    pub fn as_context(&self) -> &DecodingContext {
        &self.context
    }
}

impl<P> ContextMap<P> for UniformContextMap {
    fn context_for(&self, _successor: &P) -> DecodingContext {
        self.context.clone()
    }
}

/// Construct a context map which gives every successor a copy of `context`.
pub fn uniform(context: DecodingContext) -> UniformContextMap {
    UniformContextMap { context }
}

/// Pair each successor address with the context its map assigns to it.
///
/// Every returned pointer owns its own context, so a caller exploring
/// several successors may edit one without affecting the others.
pub fn resolve_successors<P, M, I>(map: &M, successors: I) -> Vec<Pointer<P>>
where
    M: ContextMap<P> + ?Sized,
    I: IntoIterator<Item = P>,
    P: fmt::Debug,
{
    successors
        .into_iter()
        .map(|successor| {
            let context = map.context_for(&successor);
            debug!(?successor, %context, "resolved successor context");

            Pointer::new(successor, context)
        })
        .collect()
}
