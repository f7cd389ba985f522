//! Top-level staking parameters as loaded from a params file.

use std::{fs, path::Path};

use bitcoin::Network;
use serde::{Deserialize, Serialize};

use crate::{covenant::CovenantParams, errors::ParamsResult};

/// The public staking parameters shared by every delegation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// The bitcoin network the staking outputs live on.
    pub network: Network,

    /// The covenant committee.
    pub covenant: CovenantParams,
}

impl StakingParams {
    /// Parses and validates params from a TOML string.
    pub fn from_toml_str(contents: &str) -> ParamsResult<Self> {
        let params: Self = toml::from_str(contents)?;
        params.validate()?;

        Ok(params)
    }

    /// Reads, parses and validates params from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> ParamsResult<Self> {
        let contents = fs::read_to_string(path)?;

        Self::from_toml_str(&contents)
    }

    /// Checks the consistency of the params.
    pub fn validate(&self) -> ParamsResult<()> {
        self.covenant.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use staking_test_utils::prelude::generate_xonly_pubkeys;

    use super::*;
    use crate::errors::ParamsError;

    fn sample_params() -> StakingParams {
        StakingParams {
            network: Network::Regtest,
            covenant: CovenantParams {
                keys: generate_xonly_pubkeys(3),
                quorum: 2,
            },
        }
    }

    #[test]
    fn test_staking_params_serde() {
        let params = sample_params();
        let serialized = toml::to_string(&params).unwrap();

        let deserialized = StakingParams::from_toml_str(&serialized).unwrap();

        assert_eq!(params, deserialized);

        let params_toml = r#"
            network = "signet"

            [covenant]
            quorum = 1
            keys = [
                "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            ]
        "#;
        let parsed = StakingParams::from_toml_str(params_toml);
        assert!(
            parsed.is_ok(),
            "must be able to deserialize StakingParams from a toml: {parsed:?}"
        );
        assert_eq!(parsed.unwrap().network, Network::Signet);
    }

    #[test]
    fn invalid_quorum_is_rejected_on_load() {
        let mut params = sample_params();
        params.covenant.quorum = 4;
        let serialized = toml::to_string(&params).unwrap();

        assert!(matches!(
            StakingParams::from_toml_str(&serialized),
            Err(ParamsError::InvalidQuorum { .. })
        ));
    }

    #[test]
    fn load_from_path() {
        let params = sample_params();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&params).unwrap().as_bytes())
            .unwrap();

        assert_eq!(StakingParams::from_path(file.path()).unwrap(), params);

        assert!(matches!(
            StakingParams::from_path(file.path().with_extension("missing")),
            Err(ParamsError::Io(_))
        ));
    }
}
