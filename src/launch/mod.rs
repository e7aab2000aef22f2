//! Idea launch flow: form state and validation, icon upload, simulated
//! deployment, the `/api/launch` indexing contract, and the simulated
//! crowdfunding actions behind the tool pages.

pub mod deploy;
pub mod endpoint;
pub mod form;
pub mod submit;
pub mod tools;
pub mod upload;

pub use deploy::{DeployError, DeploymentBackend, DeploymentKind, SimulatedDeployer};
pub use endpoint::{handle_launch, LaunchRecord, LaunchReply};
pub use form::{validate_icon, CrowdfundingMode, FormError, IconFile, LaunchForm};
pub use submit::{run_submission, LaunchSink, LocalLaunchEndpoint, SubmitError, SubmitOutcome, SubmitStage};
pub use upload::{AssetUploader, SimulatedIpfs};
