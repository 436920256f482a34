//! # Config Crate
//!
//! Centralized configuration constants for the tessella pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_TWIST_ANGLE, DEFAULT_LATTICE_RANGE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.0000000001; // 1e-10, smaller than EPSILON (1e-9)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use reference parameters for scene construction
//! let twist_override: Option<f64> = None;
//! let twist = twist_override.unwrap_or(DEFAULT_TWIST_ANGLE);
//! assert_eq!(twist, DEFAULT_TWIST_ANGLE);
//! assert_eq!(DEFAULT_LATTICE_RANGE, 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation
//!
//! Geometric data tables (vertex coordinate tables, face index tables,
//! lattice cell period) are deliberately NOT here: they are fixed properties
//! of the solids, owned as `const` tables by the modules that construct them.

pub mod constants;
