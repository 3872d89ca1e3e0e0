//! Fault mechanism geometry.
//!
//! This module converts fault angles into the vectors used in moment-tensor and
//! radiation-pattern work:
//! - Slip direction `u` and fault normal `v` (Aki & Richards convention)
//! - Angle domains and canonical wrapping of strike and rake
//! - Configurable validation of input angles
//! - Parallel evaluation of many orientations

mod angles;
mod config;
mod error;
mod fault;
pub mod batch;

pub use angles::{AngleKind, wrap_rake, wrap_strike};
pub use config::{AngleValidation, MechanismConfig};
pub use error::MechanismError;
pub use fault::{FaultOrientation, FaultVectors, fault2uv};
pub use batch::{fault2uv_batch, fault2uv_batch_checked};
