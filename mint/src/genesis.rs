use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::params::MintParams;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisState {
    pub params: MintParams,
}

impl GenesisState {
    pub fn new(params: MintParams) -> Self {
        Self { params }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.params.validate()
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read(path).with_context(|| {
            format!("Failed to read genesis file {}", path.display())
        })?;

        serde_json::from_slice(&raw).with_context(|| {
            format!("Failed to parse genesis file {}", path.display())
        })
    }
}
