//! # Momoto Metrics
//!
//! Contrast metric implementations.
//!
//! This crate provides concrete implementations of the `ContrastMetric` trait
//! from `momoto-core`.
//!
//! ## Features
//!
//! - `internals`: Exposes algorithm constants for debugging and education
//!
//! ## Quick Start
//!
//! ```rust
//! use momoto_core::color::Color;
//! use momoto_core::perception::ContrastMetric;
//! use momoto_metrics::LcMetric;
//!
//! let black = Color::from_srgb8(0, 0, 0);
//! let white = Color::from_srgb8(255, 255, 255);
//!
//! let lc = LcMetric.evaluate(black, white);
//! assert!((lc.value - 97.3).abs() < 0.1);
//! ```

// Note: no_std support planned for future release
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod apca;

pub use apca::LcMetric;

// Re-export contrast constants when internals feature is enabled
#[cfg(feature = "internals")]
pub use apca::constants as lc_constants;
