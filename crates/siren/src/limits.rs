//! Security limits for decoding.
//!
//! Documents typically arrive from the network, so the decoder bounds the
//! amount of recursion a single document can cause.

/// Default maximum nesting depth of sub-entities.
///
/// The root entity is depth 0; each level of `entities` adds one.
pub const MAX_DEPTH: usize = 64;
