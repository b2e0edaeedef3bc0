use std::fmt::Display;

use serde::{Deserialize, Serialize};
use shared::dec::Dec;

use crate::keys::{ParamKey, ParamValue};
use crate::store::{ParamSet, ParamStoreError};
use crate::validation::{validate_params, ValidationError};

pub const DEFAULT_BOND_DENOM: &str = "stake";

/// 8766 hours a year to account for leap years, 5 second blocks.
pub const DEFAULT_BLOCKS_PER_YEAR: u64 = 60 * 60 * 8766 / 5;

/// Monetary policy of the mint module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MintParams {
    /// Denomination of the minted coin
    pub mint_denom: String,
    /// Maximum annual change of the inflation rate
    pub inflation_rate_change: Dec,
    /// Inflation ceiling
    pub inflation_max: Dec,
    /// Inflation floor
    pub inflation_min: Dec,
    /// Target ratio of bonded tokens
    pub goal_bonded: Dec,
    /// Expected number of blocks per year
    #[serde(with = "shared::ser::u64_string")]
    pub blocks_per_year: u64,
}

impl MintParams {
    /// Builds a parameter set as given. Call [`MintParams::validate`]
    /// before accepting it.
    pub fn new(
        mint_denom: impl Into<String>,
        inflation_rate_change: Dec,
        inflation_max: Dec,
        inflation_min: Dec,
        goal_bonded: Dec,
        blocks_per_year: u64,
    ) -> Self {
        Self {
            mint_denom: mint_denom.into(),
            inflation_rate_change,
            inflation_max,
            inflation_min,
            goal_bonded,
            blocks_per_year,
        }
    }

    pub fn default_params() -> Self {
        Self {
            mint_denom: DEFAULT_BOND_DENOM.to_owned(),
            inflation_rate_change: Dec::new_with_prec(13, 2),
            inflation_max: Dec::new_with_prec(20, 2),
            inflation_min: Dec::new_with_prec(7, 2),
            goal_bonded: Dec::new_with_prec(67, 2),
            blocks_per_year: DEFAULT_BLOCKS_PER_YEAR,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_params(self)
    }

    pub fn get_param(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::MintDenom => ParamValue::Str(self.mint_denom.clone()),
            ParamKey::InflationRateChange => {
                ParamValue::Dec(self.inflation_rate_change.clone())
            }
            ParamKey::InflationMax => {
                ParamValue::Dec(self.inflation_max.clone())
            }
            ParamKey::InflationMin => {
                ParamValue::Dec(self.inflation_min.clone())
            }
            ParamKey::GoalBonded => ParamValue::Dec(self.goal_bonded.clone()),
            ParamKey::BlocksPerYear => ParamValue::Uint(self.blocks_per_year),
        }
    }

    /// Replaces a single field. No cross-field check happens here.
    pub fn set_param(
        &mut self,
        key: ParamKey,
        value: ParamValue,
    ) -> Result<(), ParamStoreError> {
        match (key, value) {
            (ParamKey::MintDenom, ParamValue::Str(value)) => {
                self.mint_denom = value
            }
            (ParamKey::InflationRateChange, ParamValue::Dec(value)) => {
                self.inflation_rate_change = value
            }
            (ParamKey::InflationMax, ParamValue::Dec(value)) => {
                self.inflation_max = value
            }
            (ParamKey::InflationMin, ParamValue::Dec(value)) => {
                self.inflation_min = value
            }
            (ParamKey::GoalBonded, ParamValue::Dec(value)) => {
                self.goal_bonded = value
            }
            (ParamKey::BlocksPerYear, ParamValue::Uint(value)) => {
                self.blocks_per_year = value
            }
            (key, value) => {
                return Err(ParamStoreError::KindMismatch {
                    key,
                    expected: key.kind(),
                    found: value.kind(),
                })
            }
        }

        Ok(())
    }
}

impl Default for MintParams {
    fn default() -> Self {
        Self::default_params()
    }
}

impl ParamSet for MintParams {
    fn param_set_pairs(&self) -> Vec<(ParamKey, ParamValue)> {
        use strum::IntoEnumIterator;

        ParamKey::iter().map(|key| (key, self.get_param(key))).collect()
    }

    fn set_param(
        &mut self,
        key: ParamKey,
        value: ParamValue,
    ) -> Result<(), ParamStoreError> {
        MintParams::set_param(self, key, value)
    }
}

impl Display for MintParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Minting Params:")?;
        writeln!(f, "  Mint Denom:             {}", self.mint_denom)?;
        writeln!(f, "  Inflation Rate Change:  {}", self.inflation_rate_change)?;
        writeln!(f, "  Inflation Max:          {}", self.inflation_max)?;
        writeln!(f, "  Inflation Min:          {}", self.inflation_min)?;
        writeln!(f, "  Goal Bonded:            {}", self.goal_bonded)?;
        writeln!(f, "  Blocks Per Year:        {}", self.blocks_per_year)
    }
}
