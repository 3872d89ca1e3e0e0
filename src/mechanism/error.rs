//! Errors raised when fault angles are validated.

use thiserror::Error;

use super::angles::AngleKind;

/// Errors that can occur when evaluating fault vectors under a validating policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MechanismError {
    #[error("Invalid {kind} angle {value}: expected a value in {}", .kind.domain())]
    InvalidAngle { kind: AngleKind, value: f64 },
    #[error("Non-finite {kind} angle: {value}")]
    NonFinite { kind: AngleKind, value: f64 },
    #[error("Fault {index} in batch: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<MechanismError>,
    },
}

impl MechanismError {
    /// Returns the angle kind that caused the error, looking through batch wrappers.
    pub fn kind(&self) -> AngleKind {
        match self {
            MechanismError::InvalidAngle { kind, .. } | MechanismError::NonFinite { kind, .. } => *kind,
            MechanismError::Batch { source, .. } => source.kind(),
        }
    }
}
