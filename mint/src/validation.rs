use shared::dec::Dec;
use thiserror::Error;

use crate::params::MintParams;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("mint parameter GoalBonded {0}")]
    InvalidGoalBonded(String),
    #[error(
        "mint parameter Max inflation must be greater than or equal to min \
         inflation"
    )]
    InvalidInflationRange,
    #[error("mint parameter MintDenom can't be an empty string")]
    InvalidDenom,
}

/// Checks the cross-field invariants of `params`, stopping at the first
/// violation.
///
/// Only goal bonded bounds, the inflation range order and a non-empty
/// denom are enforced. Negative inflation bounds, a negative rate change
/// and a zero `blocks_per_year` are accepted.
pub fn validate_params(params: &MintParams) -> Result<(), ValidationError> {
    if params.goal_bonded.is_negative() {
        return Err(ValidationError::InvalidGoalBonded(format!(
            "should be positive, is {}",
            params.goal_bonded
        )));
    }
    if params.goal_bonded > Dec::one() {
        return Err(ValidationError::InvalidGoalBonded(format!(
            "must be <= 1, is {}",
            params.goal_bonded
        )));
    }
    if params.inflation_max < params.inflation_min {
        return Err(ValidationError::InvalidInflationRange);
    }
    if params.mint_denom.is_empty() {
        return Err(ValidationError::InvalidDenom);
    }

    Ok(())
}
