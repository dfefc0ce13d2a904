//! # Config Crate
//!
//! Centralized configuration constants for the Elemental geometry toolkit.
//! Every tunable value shared by the mesh builders, the UV mapper, the mesh
//! modifiers and the noise generator lives here, so that the library crates
//! never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CHAMFERING, EDGE_BLEED_FIX, NOISE_PERSISTENCE};
//!
//! // Effective half-width of a tire of width 2.0
//! let half_width = (2.0 / 2.0) * DEFAULT_CHAMFERING;
//! assert!((half_width - 0.8).abs() < 1e-12);
//!
//! // Atlas insets are tiny compared to a 4x3 cell
//! assert!(EDGE_BLEED_FIX < 0.25 / 10.0);
//!
//! // Octave amplitudes halve
//! assert_eq!(NOISE_PERSISTENCE, 0.5);
//! ```
//!
//! ## Contents
//!
//! - **Limits**: minimum segment and point counts, pivot range, octave range
//! - **Defaults**: grid segments, cylinder chamfering, heightmap strength
//! - **Layout**: cube atlas grid and the inset that keeps cells from bleeding

pub mod constants;
