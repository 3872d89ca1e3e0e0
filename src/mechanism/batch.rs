//! Parallel evaluation of many fault orientations.

use rayon::prelude::*;

use super::config::MechanismConfig;
use super::error::MechanismError;
use super::fault::{FaultOrientation, FaultVectors};

/// Evaluates every orientation without validation, preserving input order.
///
/// This function uses parallel processing (rayon); results are identical to calling
/// [`FaultOrientation::vectors`] on each element.
pub fn fault2uv_batch(faults: &[FaultOrientation]) -> Vec<FaultVectors> {
    tracing::debug!("evaluating {} fault orientations", faults.len());
    faults.par_iter().map(FaultOrientation::vectors).collect()
}

/// Validates every orientation against `config`, then evaluates them all.
///
/// Nothing is computed unless every entry passes. The reported failure is the one with
/// the lowest index, wrapped in [`MechanismError::Batch`].
pub fn fault2uv_batch_checked(
    faults: &[FaultOrientation],
    config: &MechanismConfig,
) -> Result<Vec<FaultVectors>, MechanismError> {
    // Collect every outcome so the earliest failure wins regardless of scheduling.
    let outcomes: Vec<Result<FaultOrientation, MechanismError>> =
        faults.par_iter().map(|fault| config.validate(fault)).collect();

    let mut validated = Vec::with_capacity(outcomes.len());
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(fault) => validated.push(fault),
            Err(source) => {
                return Err(MechanismError::Batch {
                    index,
                    source: Box::new(source),
                })
            }
        }
    }

    Ok(fault2uv_batch(&validated))
}
