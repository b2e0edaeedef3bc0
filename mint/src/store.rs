use std::collections::BTreeMap;
use std::str::FromStr;

use shared::dec::Dec;
use thiserror::Error;

use crate::keys::{ParamKey, ParamKind, ParamValue};

pub const MODULE_NAME: &str = "mint";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamStoreError {
    #[error("Parameter {0} is not set")]
    MissingKey(ParamKey),
    #[error("Unknown parameter key {0:?}")]
    UnknownKey(String),
    #[error("Can't decode parameter {key}: {reason}")]
    Decode { key: ParamKey, reason: String },
    #[error("Parameter {key} expects a {expected} value, got {found}")]
    KindMismatch {
        key: ParamKey,
        expected: ParamKind,
        found: ParamKind,
    },
}

/// A record whose fields can be read and written one key at a time.
pub trait ParamSet {
    /// Every key with its current value, in registration order.
    fn param_set_pairs(&self) -> Vec<(ParamKey, ParamValue)>;

    fn set_param(
        &mut self,
        key: ParamKey,
        value: ParamValue,
    ) -> Result<(), ParamStoreError>;
}

pub trait KvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[u8], value: Vec<u8>);

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemKvStore(BTreeMap<Vec<u8>, Vec<u8>>);

impl MemKvStore {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl KvStore for MemKvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.0.insert(key.to_vec(), value);
    }

    fn has(&self, key: &[u8]) -> bool {
        self.0.contains_key(key)
    }
}

/// Values are stored as JSON strings, whatever their kind:
/// `"stake"`, `"0.130000000000000000"`, `"6311520"`.
pub fn encode_value(value: &ParamValue) -> Vec<u8> {
    serde_json::Value::String(value.to_string())
        .to_string()
        .into_bytes()
}

pub fn decode_value(
    key: ParamKey,
    bytes: &[u8],
) -> Result<ParamValue, ParamStoreError> {
    let decode_error = |reason: String| ParamStoreError::Decode { key, reason };

    let raw = serde_json::from_slice::<String>(bytes)
        .map_err(|e| decode_error(e.to_string()))?;

    match key.kind() {
        ParamKind::Str => Ok(ParamValue::Str(raw)),
        ParamKind::Dec => Dec::from_str(&raw)
            .map(ParamValue::Dec)
            .map_err(|e| decode_error(e.to_string())),
        ParamKind::Uint => u64::from_str(&raw)
            .map(ParamValue::Uint)
            .map_err(|e| decode_error(e.to_string())),
    }
}

/// Module scoped view over a [`KvStore`]. Keys are stored as
/// `<name>/<key>`.
///
/// No cross-field validation happens here, callers validate the full set
/// before or after writing it.
#[derive(Debug, Clone)]
pub struct Subspace<S> {
    name: String,
    store: S,
}

impl<S: KvStore> Subspace<S> {
    pub fn new(name: impl Into<String>, store: S) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn store_key(&self, key: ParamKey) -> Vec<u8> {
        [self.name.as_bytes(), b"/", key.bytes()].concat()
    }

    pub fn has(&self, key: ParamKey) -> bool {
        self.store.has(&self.store_key(key))
    }

    pub fn get(&self, key: ParamKey) -> Result<ParamValue, ParamStoreError> {
        let bytes = self
            .store
            .get(&self.store_key(key))
            .ok_or(ParamStoreError::MissingKey(key))?;

        let value = decode_value(key, &bytes)?;
        tracing::debug!(subspace = %self.name, %key, %value, "Read parameter");

        Ok(value)
    }

    pub fn set(
        &mut self,
        key: ParamKey,
        value: &ParamValue,
    ) -> Result<(), ParamStoreError> {
        if key.kind() != value.kind() {
            return Err(ParamStoreError::KindMismatch {
                key,
                expected: key.kind(),
                found: value.kind(),
            });
        }

        let store_key = self.store_key(key);
        self.store.set(&store_key, encode_value(value));
        tracing::debug!(subspace = %self.name, %key, %value, "Wrote parameter");

        Ok(())
    }

    /// Sets a parameter from its raw key and JSON encoded value, as
    /// received from a parameter change proposal.
    pub fn update(
        &mut self,
        key: &[u8],
        value: &[u8],
    ) -> Result<(), ParamStoreError> {
        let key = ParamKey::from_bytes(key).ok_or_else(|| {
            ParamStoreError::UnknownKey(
                String::from_utf8_lossy(key).into_owned(),
            )
        })?;
        let value = decode_value(key, value)?;

        self.set(key, &value)
    }

    /// Loads every field of `set` from the store. Nothing is applied unless
    /// all keys are present and decode.
    pub fn get_param_set<P: ParamSet>(
        &self,
        set: &mut P,
    ) -> Result<(), ParamStoreError> {
        let values = set
            .param_set_pairs()
            .into_iter()
            .map(|(key, _)| self.get(key).map(|value| (key, value)))
            .collect::<Result<Vec<_>, _>>()?;

        values
            .into_iter()
            .try_for_each(|(key, value)| set.set_param(key, value))
    }

    pub fn set_param_set<P: ParamSet>(
        &mut self,
        set: &P,
    ) -> Result<(), ParamStoreError> {
        set.param_set_pairs()
            .into_iter()
            .try_for_each(|(key, value)| self.set(key, &value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MintParams;

    fn subspace() -> Subspace<MemKvStore> {
        Subspace::new(MODULE_NAME, MemKvStore::default())
    }

    #[test]
    fn encodes_values_as_json_strings() {
        assert_eq!(
            encode_value(&ParamValue::Str("stake".to_owned())),
            br#""stake""#.to_vec()
        );
        assert_eq!(
            encode_value(&ParamValue::Dec(Dec::new_with_prec(13, 2))),
            br#""0.130000000000000000""#.to_vec()
        );
        assert_eq!(
            encode_value(&ParamValue::Uint(6_311_520)),
            br#""6311520""#.to_vec()
        );
    }

    #[test]
    fn decode_follows_key_kind() {
        assert_eq!(
            decode_value(ParamKey::GoalBonded, br#""0.67""#),
            Ok(ParamValue::Dec(Dec::new_with_prec(67, 2)))
        );
        assert_eq!(
            decode_value(ParamKey::BlocksPerYear, br#""42""#),
            Ok(ParamValue::Uint(42))
        );
        assert!(matches!(
            decode_value(ParamKey::BlocksPerYear, br#""-1""#),
            Err(ParamStoreError::Decode {
                key: ParamKey::BlocksPerYear,
                ..
            })
        ));
        assert!(matches!(
            decode_value(ParamKey::MintDenom, b"stake"),
            Err(ParamStoreError::Decode { .. })
        ));
    }

    #[test]
    fn keys_are_prefixed() {
        let mut subspace = subspace();
        subspace
            .set(ParamKey::MintDenom, &ParamValue::Str("umdu".to_owned()))
            .unwrap();

        assert!(subspace.store().has(b"mint/MintDenom"));
        assert!(!subspace.store().has(b"MintDenom"));
        assert!(subspace.has(ParamKey::MintDenom));
        assert!(!subspace.has(ParamKey::GoalBonded));
    }

    #[test]
    fn param_set_round_trip() {
        let params = MintParams::new(
            "umdu",
            Dec::new_with_prec(1, 1),
            Dec::new_with_prec(300, 4),
            Dec::zero(),
            Dec::new_with_prec(5, 1),
            1_000,
        );

        let mut subspace = subspace();
        subspace.set_param_set(&params).unwrap();
        assert_eq!(subspace.store().len(), 6);

        let mut loaded = MintParams::default_params();
        subspace.get_param_set(&mut loaded).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn partial_store_leaves_target_untouched() {
        let mut subspace = subspace();
        subspace
            .set(ParamKey::MintDenom, &ParamValue::Str("umdu".to_owned()))
            .unwrap();

        let mut params = MintParams::default_params();
        assert_eq!(
            subspace.get_param_set(&mut params),
            Err(ParamStoreError::MissingKey(ParamKey::InflationRateChange))
        );
        assert_eq!(params, MintParams::default_params());
    }

    #[test]
    fn set_checks_kind() {
        let mut subspace = subspace();

        assert!(matches!(
            subspace.set(ParamKey::GoalBonded, &ParamValue::Uint(1)),
            Err(ParamStoreError::KindMismatch { .. })
        ));
        assert!(subspace.store().is_empty());
    }

    #[test]
    fn update_from_raw_key() {
        let mut subspace = subspace();
        subspace
            .set_param_set(&MintParams::default_params())
            .unwrap();

        subspace.update(b"InflationMax", br#""0.25""#).unwrap();
        assert_eq!(
            subspace.get(ParamKey::InflationMax),
            Ok(ParamValue::Dec(Dec::new_with_prec(25, 2)))
        );

        assert_eq!(
            subspace.update(b"AnnualProvisions", br#""1""#),
            Err(ParamStoreError::UnknownKey("AnnualProvisions".to_owned()))
        );
        assert!(subspace.update(b"BlocksPerYear", br#""often""#).is_err());
        assert!(matches!(
            subspace.update(b"GoalBonded", br#""1e5000000""#),
            Err(ParamStoreError::Decode {
                key: ParamKey::GoalBonded,
                ..
            })
        ));
        assert_eq!(
            subspace.get(ParamKey::GoalBonded),
            Ok(ParamValue::Dec(Dec::new_with_prec(67, 2)))
        );
    }

    // The store does not validate: an inverted range is written as is.
    #[test]
    fn store_does_not_validate() {
        let mut subspace = subspace();
        subspace
            .set_param_set(&MintParams::default_params())
            .unwrap();
        subspace.update(b"InflationMin", br#""0.5""#).unwrap();

        let mut params = MintParams::default_params();
        subspace.get_param_set(&mut params).unwrap();
        assert_eq!(params.inflation_min, Dec::new_with_prec(5, 1));
        assert!(params.validate().is_err());
    }
}
