//! Ripple Core - recursive low-pass filter design and execution
//!
//! This crate designs Butterworth and Chebyshev low-pass filters of any order
//! as cascades of first- and second-order recursive sections, and runs them
//! sample by sample with constant per-sample cost and no allocation.
//!
//! # Design Pipeline
//!
//! 1. Place the base analog poles for the order ([`prototype::base_poles`])
//! 2. Pre-warp the cutoff, `v = tan(π·f)` ([`prototype::prewarp`])
//! 3. Warp each pole for the family ([`Butterworth`], [`Chebyshev`])
//! 4. Map to the z-plane ([`bilinear::bilinear`])
//! 5. Convert to unity-DC-gain coefficients ([`coefficients`])
//!
//! [`FilterCascade`] runs the whole pipeline and owns the resulting
//! [`BiquadSection`]s and optional [`SinglePoleSection`].
//!
//! # Filters
//!
//! - [`ButterworthLowpass`] - Maximally flat passband, -3 dB at the cutoff
//! - [`ChebyshevLowpass`] - Equiripple passband, steeper transition band
//!
//! # Building Blocks
//!
//! - [`SinglePoleSection`] / [`BiquadSection`] - Direct form II sections
//! - [`SampleProcessor`] - Object-safe per-sample processing trait
//! - [`Chain`] - Zero-cost series combinator
//!
//! # Configuration Ranges
//!
//! Orders, cutoffs and ripples are clamped into range rather than rejected
//! (see [`limits`]). Cutoffs are normalized: a fraction of the sample rate in
//! `(0, 0.5)`.
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! ripple-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `tracing` feature to log reconfiguration and clamped inputs.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{ChebyshevLowpass, SampleProcessor};
//!
//! // 6th-order, cutoff at a tenth of the sample rate, 0.5 dB ripple
//! let mut lp = ChebyshevLowpass::chebyshev(6, 0.1, 0.5);
//!
//! let mut buffer = [0.0f64; 64];
//! buffer[0] = 1.0;
//! lp.process_block_inplace(&mut buffer);
//!
//! // Retune between blocks
//! lp.set_cutoff(0.2);
//! lp.set_order(7);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bilinear;
pub mod cascade;
pub mod coefficients;
pub mod limits;
pub mod processor;
pub mod prototype;
pub mod response;
pub mod section;

// Re-export main types at crate root
pub use cascade::{ButterworthLowpass, ChebyshevLowpass, FilterCascade};
pub use limits::{
    DEFAULT_CUTOFF, DEFAULT_ORDER, DEFAULT_RIPPLE_DB, MAX_CUTOFF, MAX_ORDER, MAX_RIPPLE_DB,
    MIN_CUTOFF, MIN_ORDER, MIN_RIPPLE_DB,
};
pub use num_complex::Complex64;
pub use processor::{Chain, SampleProcessor, SampleProcessorExt};
pub use prototype::{Butterworth, Chebyshev, ChebyshevWarp, Prototype};
pub use response::{ResponsePoint, magnitude_to_db};
pub use section::{BiquadSection, SinglePoleSection};
