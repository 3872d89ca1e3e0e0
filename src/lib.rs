//! Fault slip and normal vectors for seismology.
//!
//! This crate converts a fault's strike, dip and rake into the unit slip vector and
//! the unit fault normal, in the North-East-Down frame of Aki & Richards (1980).

pub mod mechanism;

pub use mechanism::{
    AngleKind, AngleValidation, FaultOrientation, FaultVectors, MechanismConfig, MechanismError,
    fault2uv, fault2uv_batch, fault2uv_batch_checked,
};
