use std::fmt::Display;

use shared::dec::Dec;
use strum::IntoEnumIterator;

/// Parameter store keys of the mint module, in registration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::Display,
)]
pub enum ParamKey {
    MintDenom,
    InflationRateChange,
    InflationMax,
    InflationMin,
    GoalBonded,
    BlocksPerYear,
}

impl ParamKey {
    pub fn bytes(&self) -> &'static [u8] {
        match self {
            ParamKey::MintDenom => b"MintDenom",
            ParamKey::InflationRateChange => b"InflationRateChange",
            ParamKey::InflationMax => b"InflationMax",
            ParamKey::InflationMin => b"InflationMin",
            ParamKey::GoalBonded => b"GoalBonded",
            ParamKey::BlocksPerYear => b"BlocksPerYear",
        }
    }

    pub fn from_bytes(key: &[u8]) -> Option<Self> {
        ParamKey::iter().find(|candidate| candidate.bytes() == key)
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            ParamKey::MintDenom => ParamKind::Str,
            ParamKey::InflationRateChange
            | ParamKey::InflationMax
            | ParamKey::InflationMin
            | ParamKey::GoalBonded => ParamKind::Dec,
            ParamKey::BlocksPerYear => ParamKind::Uint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ParamKind {
    Str,
    Dec,
    Uint,
}

/// A single parameter value as the store sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Dec(Dec),
    Uint(u64),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Str(_) => ParamKind::Str,
            ParamValue::Dec(_) => ParamKind::Dec,
            ParamValue::Uint(_) => ParamKind::Uint,
        }
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(value) => write!(f, "{}", value),
            ParamValue::Dec(value) => write!(f, "{}", value),
            ParamValue::Uint(value) => write!(f, "{}", value),
        }
    }
}
