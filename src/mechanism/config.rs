//! Configuration for checked fault-vector evaluation.

use serde::{Deserialize, Serialize};

use super::angles::AngleKind;
use super::error::MechanismError;
use super::fault::FaultOrientation;

/// How strictly input angles are checked before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleValidation {
    /// Accept any input, including NaN.
    #[default]
    None,
    /// Require finite angles and a dip in [0, 90]. Strike and rake are periodic and unchecked.
    Dip,
    /// Require finite angles, each in its documented domain.
    Full,
}

/// Configuration parameters for checked evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MechanismConfig {
    /// Validation policy applied to every orientation.
    pub validation: AngleValidation,
    /// Wrap strike into [0, 360) and rake into (-180, 180] before validating.
    pub wrap_angles: bool,
}

impl MechanismConfig {
    /// Accepts every input unchanged.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Wraps strike and rake, and rejects only a dip outside [0, 90] or non-finite input.
    pub fn lenient() -> Self {
        Self {
            validation: AngleValidation::Dip,
            wrap_angles: true,
        }
    }

    /// Rejects any angle outside its documented domain.
    pub fn strict() -> Self {
        Self {
            validation: AngleValidation::Full,
            wrap_angles: false,
        }
    }

    /// Checks `fault` against this configuration.
    ///
    /// # Returns
    /// The orientation to evaluate (wrapped if `wrap_angles` is set), or the first
    /// offending angle in strike, dip, rake order. Errors carry the caller's value.
    pub fn validate(&self, fault: &FaultOrientation) -> Result<FaultOrientation, MechanismError> {
        let evaluated = if self.wrap_angles { fault.wrapped() } else { *fault };

        let checked: &[AngleKind] = match self.validation {
            AngleValidation::None => return Ok(evaluated),
            AngleValidation::Dip => &[AngleKind::Dip],
            AngleValidation::Full => &[AngleKind::Strike, AngleKind::Dip, AngleKind::Rake],
        };

        for kind in AngleKind::all() {
            // Wrapping turns infinities into NaN, so finiteness is judged on the input.
            let value = angle_of(fault, kind);
            if !value.is_finite() {
                tracing::debug!("rejecting non-finite {} angle {}", kind, value);
                return Err(MechanismError::NonFinite { kind, value });
            }
            if checked.contains(&kind) && !kind.contains(angle_of(&evaluated, kind)) {
                tracing::debug!("rejecting {} angle {} outside {}", kind, value, kind.domain());
                return Err(MechanismError::InvalidAngle { kind, value });
            }
        }
        Ok(evaluated)
    }
}

fn angle_of(fault: &FaultOrientation, kind: AngleKind) -> f64 {
    match kind {
        AngleKind::Strike => fault.strike,
        AngleKind::Dip => fault.dip,
        AngleKind::Rake => fault.rake,
    }
}
