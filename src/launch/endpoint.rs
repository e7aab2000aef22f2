use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrowdfundingPayload {
    pub mode: String,
    pub price: String,
    pub goal: String,
    pub revenue_share: String,
    pub token_symbol: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SocialMedia {
    pub twitter: String,
    pub discord: String,
    pub telegram: String,
}

impl SocialMedia {
    pub fn has_any(&self) -> bool {
        [&self.twitter, &self.discord, &self.telegram]
            .iter()
            .any(|s| !s.trim().is_empty())
    }
}

/// Flattened idea + crowdfunding + social payload indexed after deployment.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    pub creator: String,
    pub title: String,
    pub description: String,
    pub icon_hash: String,
    pub tags: Vec<String>,
    pub crowdfunding: Option<CrowdfundingPayload>,
    pub social_media: SocialMedia,
    pub timestamp: i64,
    /// Empty until the deployment returned a transaction id.
    #[serde(default)]
    pub tx_hash: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchReply {
    pub status: u16,
    pub message: String,
    /// Set on 405 replies.
    pub allow: Option<Vec<&'static str>>,
}

impl LaunchReply {
    fn new(status: u16, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            allow: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

// Mirrors JavaScript truthiness for the loosely-typed request body.
fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Request handler semantics of `POST /api/launch`.
pub fn handle_launch(method: &str, body: &Value) -> LaunchReply {
    if !method.eq_ignore_ascii_case("POST") {
        return LaunchReply {
            allow: Some(vec!["POST"]),
            ..LaunchReply::new(405, "Method Not Allowed")
        };
    }

    let field = |k: &str| body.get(k);

    if !truthy(field("creator")) || !truthy(field("title")) || !truthy(field("description")) {
        return LaunchReply::new(400, "Missing required fields: creator, title, description");
    }

    if !truthy(field("txHash")) {
        return LaunchReply::new(
            400,
            "Transaction hash is required for blockchain verification",
        );
    }

    let crowdfunding = field("crowdfunding").filter(|c| truthy(Some(c)));
    if let Some(cf) = crowdfunding {
        if !truthy(cf.get("price")) {
            return LaunchReply::new(400, "Funding price is required for crowdfunding campaign");
        }

        if cf.get("mode").and_then(|m| m.as_str()) == Some("token")
            && !truthy(cf.get("tokenSymbol"))
        {
            return LaunchReply::new(400, "Token symbol is required for token crowdfunding");
        }

        let social = field("socialMedia");
        let has_contact = ["twitter", "discord", "telegram"]
            .iter()
            .any(|k| truthy(social.and_then(|s| s.get(*k))));
        if !has_contact {
            return LaunchReply::new(
                400,
                "At least one contact method is required for crowdfunding campaign",
            );
        }
    }

    log::info!(
        "[BLOCKCHAIN IDEA INDEXED] creator={} title={} description_len={} tx={} tags={}",
        body["creator"].as_str().unwrap_or_default(),
        body["title"].as_str().unwrap_or_default(),
        body["description"].as_str().map(|d| d.len()).unwrap_or(0),
        body["txHash"].as_str().unwrap_or_default(),
        body["tags"].as_array().map(|t| t.len()).unwrap_or(0),
    );

    LaunchReply::new(200, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Value {
        json!({
            "creator": "0xabc",
            "title": "Idea",
            "description": "Something useful",
            "iconHash": "QmX123",
            "tags": ["a", "b"],
            "crowdfunding": null,
            "socialMedia": {"twitter": "", "discord": "", "telegram": ""},
            "timestamp": 1_700_000_000_000i64,
            "txHash": "0xidea42"
        })
    }

    #[test]
    fn test_non_post_is_405_with_allow_header() {
        let r = handle_launch("GET", &base());
        assert_eq!(r.status, 405);
        assert_eq!(r.message, "Method Not Allowed");
        assert_eq!(r.allow, Some(vec!["POST"]));
    }

    #[test]
    fn test_plain_registration_is_accepted() {
        let r = handle_launch("POST", &base());
        assert!(r.is_ok());
        assert_eq!(r.message, "OK");
    }

    #[test]
    fn test_missing_required_fields() {
        let mut body = base();
        body["description"] = json!("");
        let r = handle_launch("POST", &body);
        assert_eq!(r.status, 400);
        assert_eq!(r.message, "Missing required fields: creator, title, description");

        let r = handle_launch("POST", &json!({}));
        assert_eq!(r.status, 400);
    }

    #[test]
    fn test_missing_tx_hash() {
        let mut body = base();
        body["txHash"] = json!("");
        let r = handle_launch("POST", &body);
        assert_eq!(r.status, 400);
        assert!(r.message.starts_with("Transaction hash is required"));
    }

    #[test]
    fn test_crowdfunding_rules() {
        let mut body = base();
        body["crowdfunding"] = json!({"mode": "nft", "price": ""});
        assert_eq!(
            handle_launch("POST", &body).message,
            "Funding price is required for crowdfunding campaign"
        );

        body["crowdfunding"] = json!({"mode": "token", "price": "0.1", "tokenSymbol": ""});
        assert_eq!(
            handle_launch("POST", &body).message,
            "Token symbol is required for token crowdfunding"
        );

        body["crowdfunding"] = json!({"mode": "token", "price": "0.1", "tokenSymbol": "IDEA"});
        assert_eq!(
            handle_launch("POST", &body).message,
            "At least one contact method is required for crowdfunding campaign"
        );

        body["socialMedia"]["telegram"] = json!("@idea");
        assert!(handle_launch("POST", &body).is_ok());
    }

    #[test]
    fn test_serialized_record_passes_validation() {
        let record = LaunchRecord {
            creator: "0xabc".to_string(),
            title: "Idea".to_string(),
            description: "desc".to_string(),
            icon_hash: "QmX".to_string(),
            tags: vec![],
            crowdfunding: Some(CrowdfundingPayload {
                mode: "dao".to_string(),
                price: "1".to_string(),
                ..Default::default()
            }),
            social_media: SocialMedia {
                discord: "idea#1".to_string(),
                ..Default::default()
            },
            timestamp: 0,
            tx_hash: "0xdao1".to_string(),
        };
        let v = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(v["socialMedia"]["discord"], "idea#1");
        assert_eq!(v["crowdfunding"]["tokenSymbol"], "");
        assert!(handle_launch("POST", &v).is_ok());
    }
}
