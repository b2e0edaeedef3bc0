use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fractional digits a [`Dec`] carries.
pub const PRECISION: i64 = 18;

/// Integer digits accepted when parsing, keeps the scaled value within
/// 256 bits.
pub const MAX_INTEGER_DIGITS: usize = 59;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecError {
    #[error("Invalid decimal {0:?}")]
    Parse(String),
    #[error("Decimal {value:?} has more than 18 fractional digits")]
    TooPrecise { value: String },
    #[error("Decimal {value:?} has more than 59 integer digits")]
    OutOfRange { value: String },
}

/// Signed fixed-point decimal with [`PRECISION`] fractional digits.
///
/// Equality and ordering compare numeric values, so `0.13` and `0.1300`
/// are the same `Dec`. The text form always prints every fractional digit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dec(BigDecimal);

impl Dec {
    /// `value * 10^-prec`, e.g. `new_with_prec(13, 2)` is `0.13`.
    ///
    /// Panics when `prec` exceeds [`PRECISION`].
    pub fn new_with_prec(value: i64, prec: u32) -> Self {
        assert!(
            i64::from(prec) <= PRECISION,
            "precision {} is above {}",
            prec,
            PRECISION
        );
        Self(BigDecimal::new(BigInt::from(value), i64::from(prec)))
    }

    pub fn zero() -> Self {
        Self(BigDecimal::from(0i64))
    }

    pub fn one() -> Self {
        Self(BigDecimal::from(1i64))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::from(0i64)
    }
}

impl Default for Dec {
    fn default() -> Self {
        Self::zero()
    }
}

/// Accepts `[-]digits[.digits]` only, no exponent and no `+` sign.
impl FromStr for Dec {
    type Err = DecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let unsigned = raw.strip_prefix('-').unwrap_or(raw);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let is_digits = |part: &str| {
            !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_digits(int_part) || !frac_part.map_or(true, is_digits) {
            return Err(DecError::Parse(s.to_owned()));
        }
        if int_part.trim_start_matches('0').len() > MAX_INTEGER_DIGITS {
            return Err(DecError::OutOfRange {
                value: s.to_owned(),
            });
        }
        let frac_digits =
            frac_part.map_or(0, |frac| frac.trim_end_matches('0').len());
        if frac_digits > PRECISION as usize {
            return Err(DecError::TooPrecise {
                value: s.to_owned(),
            });
        }

        BigDecimal::from_str(raw)
            .map(Self)
            .map_err(|_| DecError::Parse(s.to_owned()))
    }
}

impl Display for Dec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (atto, _) = self.0.with_scale(PRECISION).into_bigint_and_exponent();
        let atto = atto.to_string();
        let (sign, digits) = match atto.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", atto.as_str()),
        };

        let width = PRECISION as usize + 1;
        let digits = format!("{:0>width$}", digits, width = width);
        let (int_part, frac_part) =
            digits.split_at(digits.len() - PRECISION as usize);

        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

impl Serialize for Dec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Dec::from_str(&raw).map_err(serde::de::Error::custom)
    }
}
