//! Deployment capability. Only a simulated backend ships; a real chain
//! integration would implement [`DeploymentBackend`] and slot in unchanged.

use super::endpoint::LaunchRecord;
use super::form::CrowdfundingMode;
use crate::util::{random_hex, sleep_ms};
use async_trait::async_trait;
use std::str::FromStr;
use strum::Display;

pub type TxHash = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DeploymentKind {
    Nft,
    Token,
    Dao,
    Presale,
    Registry,
}

impl DeploymentKind {
    pub fn from_mode(mode: Option<CrowdfundingMode>) -> Self {
        match mode {
            Some(CrowdfundingMode::Nft) => Self::Nft,
            Some(CrowdfundingMode::Token) => Self::Token,
            Some(CrowdfundingMode::Dao) => Self::Dao,
            Some(CrowdfundingMode::Presale) => Self::Presale,
            None => Self::Registry,
        }
    }

    /// Derive the kind from a serialized record's crowdfunding mode.
    pub fn for_record(record: &LaunchRecord) -> Result<Self, DeployError> {
        match &record.crowdfunding {
            None => Ok(Self::Registry),
            Some(cf) => CrowdfundingMode::from_str(&cf.mode)
                .map(|m| Self::from_mode(Some(m)))
                .map_err(|_| DeployError::InvalidMode(cf.mode.clone())),
        }
    }

    pub fn tx_prefix(self) -> &'static str {
        match self {
            Self::Nft => "nft",
            Self::Token => "token",
            Self::Dao => "dao",
            Self::Presale => "presale",
            Self::Registry => "idea",
        }
    }

    pub fn simulated_delay_ms(self) -> u32 {
        match self {
            Self::Registry => 1_500,
            _ => 2_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    #[error("Deployment failed: {0}")]
    Rejected(String),
    #[error("Deployment failed: Invalid crowdfunding mode '{0}'")]
    InvalidMode(String),
}

#[async_trait(?Send)]
pub trait DeploymentBackend {
    async fn deploy(&self, kind: DeploymentKind, record: &LaunchRecord)
        -> Result<TxHash, DeployError>;
}

pub fn simulated_tx_hash(kind: DeploymentKind, entropy_hex: &str) -> TxHash {
    format!("0x{}{}", kind.tx_prefix(), entropy_hex)
}

/// Waits a kind-specific delay, then returns a synthetic transaction hash.
#[derive(Clone, Debug)]
pub struct SimulatedDeployer {
    instant: bool,
}

impl Default for SimulatedDeployer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedDeployer {
    pub fn new() -> Self {
        Self { instant: false }
    }

    /// No artificial delay.
    pub fn instant() -> Self {
        Self { instant: true }
    }

    /// Wait `delay_ms` (skipped when instant), then return a synthetic hash
    /// tagged with `kind`.
    pub async fn transact(&self, kind: DeploymentKind, delay_ms: u32) -> TxHash {
        if !self.instant {
            sleep_ms(delay_ms).await;
        }
        simulated_tx_hash(kind, &random_hex(8))
    }
}

#[async_trait(?Send)]
impl DeploymentBackend for SimulatedDeployer {
    async fn deploy(
        &self,
        kind: DeploymentKind,
        record: &LaunchRecord,
    ) -> Result<TxHash, DeployError> {
        if record.creator.trim().is_empty() {
            return Err(DeployError::Rejected("missing creator address".to_string()));
        }

        log::debug!("simulating {kind} deployment for '{}'", record.title);
        let tx = self.transact(kind, kind.simulated_delay_ms()).await;
        log::debug!("simulated deployment tx {tx}");
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::endpoint::CrowdfundingPayload;
    use futures::executor::block_on;

    fn record(mode: Option<&str>) -> LaunchRecord {
        LaunchRecord {
            creator: "0xabc".to_string(),
            title: "Idea".to_string(),
            crowdfunding: mode.map(|m| CrowdfundingPayload {
                mode: m.to_string(),
                price: "1".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_kind_from_mode() {
        assert_eq!(DeploymentKind::from_mode(None), DeploymentKind::Registry);
        assert_eq!(
            DeploymentKind::from_mode(Some(CrowdfundingMode::Presale)),
            DeploymentKind::Presale
        );
        assert_eq!(
            DeploymentKind::for_record(&record(Some("dao"))),
            Ok(DeploymentKind::Dao)
        );
        assert_eq!(
            DeploymentKind::for_record(&record(Some("lottery"))),
            Err(DeployError::InvalidMode("lottery".to_string()))
        );
    }

    #[test]
    fn test_delays() {
        assert_eq!(DeploymentKind::Registry.simulated_delay_ms(), 1_500);
        assert_eq!(DeploymentKind::Dao.simulated_delay_ms(), 2_000);
        assert_eq!(DeploymentKind::Nft.simulated_delay_ms(), 2_000);
    }

    #[test]
    fn test_tx_hash_prefixes() {
        assert_eq!(simulated_tx_hash(DeploymentKind::Registry, "ab"), "0xideaab");
        assert_eq!(simulated_tx_hash(DeploymentKind::Presale, "01"), "0xpresale01");
    }

    #[test]
    fn test_instant_deployer_returns_prefixed_hash() {
        let d = SimulatedDeployer::instant();
        let tx = block_on(d.deploy(DeploymentKind::Token, &record(Some("token"))))
            .expect("deploy should succeed");
        assert!(tx.starts_with("0xtoken"));
        assert_eq!(tx.len(), "0xtoken".len() + 16);
    }

    #[test]
    fn test_deploy_error_display() {
        let e = DeployError::Rejected("user denied".to_string());
        assert_eq!(e.to_string(), "Deployment failed: user denied");

        let d = SimulatedDeployer::instant();
        let mut r = record(None);
        r.creator.clear();
        assert!(block_on(d.deploy(DeploymentKind::Registry, &r)).is_err());
    }
}
