use super::form::IconFile;
use crate::api::{ApiClient, ApiError};
use crate::util::{random_base36, sleep_ms};
use async_trait::async_trait;

pub const SIMULATED_UPLOAD_DELAY_MS: u32 = 1_000;

#[async_trait(?Send)]
pub trait AssetUploader {
    /// Store the icon and return its content hash or URL.
    async fn upload(&self, icon: &IconFile) -> Result<String, ApiError>;
}

/// Stand-in for IPFS pinning: `Qm`-style hash after a short pause.
#[derive(Clone, Debug)]
pub struct SimulatedIpfs {
    pub delay_ms: u32,
}

impl Default for SimulatedIpfs {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_UPLOAD_DELAY_MS,
        }
    }
}

#[async_trait(?Send)]
impl AssetUploader for SimulatedIpfs {
    async fn upload(&self, icon: &IconFile) -> Result<String, ApiError> {
        sleep_ms(self.delay_ms).await;
        let hash = format!("QmX{}", random_base36(11));
        log::debug!("pinned {} ({} bytes) as {hash}", icon.name, icon.size());
        Ok(hash)
    }
}

/// Uploads through the backend `/upload` endpoint.
#[async_trait(?Send)]
impl AssetUploader for ApiClient {
    async fn upload(&self, icon: &IconFile) -> Result<String, ApiError> {
        let res = self
            .upload_file(&icon.name, &icon.mime, icon.bytes.clone())
            .await?;
        Ok(res.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_simulated_ipfs_hash_shape() {
        let up = SimulatedIpfs { delay_ms: 0 };
        let icon = IconFile {
            name: "a.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
            preview_url: None,
        };
        let hash = block_on(up.upload(&icon)).expect("simulated upload succeeds");
        assert!(hash.starts_with("QmX"));
        assert_eq!(hash.len(), 14);
    }
}
