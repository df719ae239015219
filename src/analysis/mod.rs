//! Tools a decoder uses to carry decoding contexts across control flow

mod cache;
mod successor;

pub use cache::DecodeCache;
pub use successor::{resolve_successors, uniform, ContextMap, UniformContextMap};
