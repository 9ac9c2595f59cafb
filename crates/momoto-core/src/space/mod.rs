//! Color space implementations.

pub mod oklch;
