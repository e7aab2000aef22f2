use super::deploy::{DeployError, DeploymentBackend, DeploymentKind, TxHash};
use super::endpoint::{handle_launch, LaunchRecord};
use super::form::{CrowdfundingMode, FormError, LaunchForm};
use super::upload::AssetUploader;
use crate::api::{ApiClient, ApiError, ApiResult};
use async_trait::async_trait;

/// Where a deployed launch is recorded for indexing and search.
#[async_trait(?Send)]
pub trait LaunchSink {
    async fn persist(&self, record: &LaunchRecord) -> ApiResult<String>;
}

/// Runs the `/api/launch` handler in-process.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalLaunchEndpoint;

#[async_trait(?Send)]
impl LaunchSink for LocalLaunchEndpoint {
    async fn persist(&self, record: &LaunchRecord) -> ApiResult<String> {
        let body = serde_json::to_value(record).map_err(|e| ApiError::Parse(e.to_string()))?;
        let reply = handle_launch("POST", &body);
        if reply.is_ok() {
            Ok(reply.message)
        } else {
            Err(ApiError::Http {
                status: reply.status,
                message: reply.message,
            })
        }
    }
}

#[async_trait(?Send)]
impl LaunchSink for ApiClient {
    async fn persist(&self, record: &LaunchRecord) -> ApiResult<String> {
        self.submit_launch(record).await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStage {
    Uploading,
    Deploying,
    Indexing,
}

impl SubmitStage {
    pub fn message(self) -> &'static str {
        match self {
            Self::Uploading => "📤 Uploading to IPFS...",
            Self::Deploying => "⛓️ Deploying to blockchain...",
            Self::Indexing => "🗂️ Recording launch...",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Icon upload failed: {0}")]
    Upload(ApiError),
    #[error(transparent)]
    Deploy(#[from] DeployError),
    #[error("Failed to record launch: {0}")]
    Persist(ApiError),
}

impl SubmitError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Form(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub tx_hash: TxHash,
    /// Set when the launch opened a crowdfunding campaign.
    pub mode: Option<CrowdfundingMode>,
}

impl SubmitOutcome {
    pub fn message(&self) -> String {
        let short: String = self.tx_hash.chars().take(10).collect();
        format!("✅ Idea deployed successfully! Transaction: {short}...")
    }
}

/// Validate, upload the icon, deploy, then record the launch.
///
/// Validation failures return before any capability is touched. Every later
/// failure ends the run; nothing is retried.
pub async fn run_submission(
    form: &LaunchForm,
    uploader: &dyn AssetUploader,
    deployer: &dyn DeploymentBackend,
    sink: &dyn LaunchSink,
    now_ms: i64,
    on_stage: &dyn Fn(SubmitStage),
) -> Result<SubmitOutcome, SubmitError> {
    form.validate()?;
    let Some(icon) = form.icon.as_ref() else {
        return Err(FormError::MissingIcon.into());
    };

    on_stage(SubmitStage::Uploading);
    let icon_hash = uploader.upload(icon).await.map_err(SubmitError::Upload)?;

    on_stage(SubmitStage::Deploying);
    let mut record = form.to_record(&icon_hash, now_ms);
    let kind = DeploymentKind::for_record(&record)?;
    let tx_hash = deployer.deploy(kind, &record).await?;
    record.tx_hash = tx_hash.clone();

    on_stage(SubmitStage::Indexing);
    sink.persist(&record).await.map_err(SubmitError::Persist)?;
    log::info!("launch recorded: {} ({kind})", tx_hash);

    Ok(SubmitOutcome {
        tx_hash,
        mode: form.active_mode(),
    })
}
