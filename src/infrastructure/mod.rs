//! Handler implementations.

pub mod in_memory;
pub mod null;
pub mod official;
