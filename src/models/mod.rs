use serde::{Deserialize, Serialize};

/// One entry of an idea's update feed. `messages[0]` is the latest one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaMessage {
    pub title: String,
    /// Always milliseconds since the epoch once normalized.
    #[serde(rename = "created")]
    pub created_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LaunchContacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
}

impl LaunchContacts {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.discord.is_none() && self.telegram.is_none()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_eth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_goal_eth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_share_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<LaunchContacts>,
}

/// Canonical display shape every backend record is normalized into.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub bg_color: String,
    pub category: String,
    #[serde(rename = "type")]
    pub idea_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<String>,
    #[serde(default)]
    pub messages: Vec<IdeaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch: Option<LaunchParams>,
}

impl Idea {
    pub fn latest_message(&self) -> Option<&IdeaMessage> {
        self.messages.first()
    }

    /// Case-insensitive comparison against a connected wallet address.
    pub fn is_owned_by(&self, account: &str) -> bool {
        let account = account.trim();
        match self.deployer.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() && !account.is_empty() => d.eq_ignore_ascii_case(account),
            _ => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthRequest {
    pub wallet_address: String,
    pub signature: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub wallet_address: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CreateIdeaRequest {
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub idea_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UpdateLaunchParamsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_eth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_goal_eth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_share_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
}
