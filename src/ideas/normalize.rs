use crate::models::{Idea, IdeaMessage, LaunchContacts, LaunchParams};
use crate::util::now_ms;
use serde_json::Value;

pub const DEFAULT_ICON: &str = "💡";
pub const DEFAULT_BG_COLOR: &str = "#f3f4f6";
pub const DEFAULT_CATEGORY: &str = "Free Ideas";
pub const DEFAULT_TYPE: &str = "free";
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Values above this are taken as milliseconds, anything else as seconds.
pub const MILLIS_THRESHOLD: f64 = 1e12;

/// Normalize one backend record against the current clock.
pub fn normalize(raw: &Value) -> Option<Idea> {
    normalize_at(raw, now_ms())
}

/// Normalize a whole response list, dropping records without a usable id.
pub fn normalize_all(raw: &[Value]) -> Vec<Idea> {
    let now = now_ms();
    raw.iter().filter_map(|r| normalize_at(r, now)).collect()
}

/// Map one heterogeneous backend record into the canonical [`Idea`] shape.
///
/// Returns `None` when the record carries no integer `id`.
pub fn normalize_at(raw: &Value, now_ms: i64) -> Option<Idea> {
    let id = parse_id(raw.get("id")?)?;

    let get_s = |k: &str| {
        raw.get(k)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let first_of = |keys: &[&str]| keys.iter().find_map(|k| get_s(*k));

    let name = first_of(&["title", "name"]).unwrap_or_else(|| format!("Idea #{id}"));
    let icon = first_of(&["icon_hash", "icon"]).unwrap_or_else(|| DEFAULT_ICON.to_string());
    let bg_color = get_s("bg_color").unwrap_or_else(|| DEFAULT_BG_COLOR.to_string());
    let category = get_s("category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let idea_type = first_of(&["crowdfunding_mode", "crowdfundingMode", "type", "idea_type"])
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let mut messages: Vec<IdeaMessage> = raw
        .get("messages")
        .and_then(|v| v.as_array())
        .map(|list| list.iter().filter_map(|m| parse_message(m, now_ms)).collect())
        .unwrap_or_default();
    // Nothing usable in `messages`: synthesize the single overview entry.
    if messages.is_empty() {
        let created = ["timestamp", "created"]
            .iter()
            .find_map(|k| raw.get(*k).and_then(timestamp_value));
        messages.push(IdeaMessage {
            title: get_s("description").unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            created_ms: to_millis(created, now_ms),
            href: Some(format!("/ideas/{id}")),
        });
    }

    Some(Idea {
        id,
        name,
        icon,
        bg_color,
        category,
        idea_type,
        chain: get_s("chain"),
        deployer: get_s("deployer"),
        messages,
        launch: raw.get("launch").and_then(parse_launch),
    })
}

/// Resolve a raw timestamp (seconds or milliseconds) to milliseconds.
///
/// Missing, unparseable, or non-positive values fall back to `now_ms`.
/// A value of exactly `1e12` is read as seconds.
pub fn to_millis(raw: Option<f64>, now_ms: i64) -> i64 {
    match raw {
        Some(t) if t.is_finite() && t > 0.0 => {
            if t > MILLIS_THRESHOLD {
                t as i64
            } else {
                (t * 1000.0) as i64
            }
        }
        _ => now_ms,
    }
}

fn parse_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn timestamp_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn parse_message(m: &Value, now_ms: i64) -> Option<IdeaMessage> {
    let title = m.get("title").and_then(|v| v.as_str())?.to_string();
    let created = ["created", "timestamp"]
        .iter()
        .find_map(|k| m.get(*k).and_then(timestamp_value));
    let href = m
        .get("href")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string);

    Some(IdeaMessage {
        title,
        created_ms: to_millis(created, now_ms),
        href,
    })
}

fn parse_launch(v: &Value) -> Option<LaunchParams> {
    if !v.is_object() {
        return None;
    }

    let get_f = |keys: &[&str]| {
        keys.iter().find_map(|k| {
            v.get(*k).and_then(|x| match x {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
        })
    };

    let contacts = v.get("contacts").map(|c| {
        let get_c = |k: &str| {
            c.get(k)
                .and_then(|x| x.as_str())
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        LaunchContacts {
            twitter: get_c("twitter"),
            discord: get_c("discord"),
            telegram: get_c("telegram"),
        }
    });

    Some(LaunchParams {
        price_eth: get_f(&["priceEth", "price_eth"]),
        funding_goal_eth: get_f(&["fundingGoalEth", "funding_goal_eth"]),
        revenue_share_pct: get_f(&["revenueSharePct", "revenue_share_pct"]),
        contacts: contacts.filter(|c| !c.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_name_falls_back_from_title_to_name_to_synthetic() {
        let a = normalize_at(&json!({"id": 1, "title": "T", "name": "N"}), NOW).unwrap();
        assert_eq!(a.name, "T");

        let b = normalize_at(&json!({"id": 2, "name": "N"}), NOW).unwrap();
        assert_eq!(b.name, "N");

        let c = normalize_at(&json!({"id": 3, "title": "  ", "name": ""}), NOW).unwrap();
        assert_eq!(c.name, "Idea #3");
    }

    #[test]
    fn test_field_defaults() {
        let i = normalize_at(&json!({"id": 9}), NOW).unwrap();
        assert_eq!(i.icon, DEFAULT_ICON);
        assert_eq!(i.bg_color, DEFAULT_BG_COLOR);
        assert_eq!(i.category, DEFAULT_CATEGORY);
        assert_eq!(i.idea_type, DEFAULT_TYPE);
        assert!(i.chain.is_none());
        assert!(i.deployer.is_none());
        assert!(i.launch.is_none());

        assert_eq!(i.messages.len(), 1);
        assert_eq!(i.messages[0].title, DEFAULT_DESCRIPTION);
        assert_eq!(i.messages[0].created_ms, NOW);
        assert_eq!(i.messages[0].href.as_deref(), Some("/ideas/9"));
    }

    #[test]
    fn test_icon_and_type_resolution_order() {
        let i = normalize_at(
            &json!({
                "id": 1,
                "icon_hash": "QmHash",
                "icon": "🚀",
                "crowdfundingMode": "dao",
                "type": "nft"
            }),
            NOW,
        )
        .unwrap();
        assert_eq!(i.icon, "QmHash");
        assert_eq!(i.idea_type, "dao");

        let j = normalize_at(
            &json!({"id": 2, "icon": "🚀", "crowdfunding_mode": "token", "crowdfundingMode": "dao"}),
            NOW,
        )
        .unwrap();
        assert_eq!(j.icon, "🚀");
        assert_eq!(j.idea_type, "token");
    }

    #[test]
    fn test_timestamp_seconds_and_millis() {
        assert_eq!(to_millis(Some(1_700_000_000.0), NOW), 1_700_000_000_000);
        assert_eq!(to_millis(Some(1_700_000_000_123.0), NOW), 1_700_000_000_123);
        // Exactly at the threshold counts as seconds.
        assert_eq!(to_millis(Some(1e12), NOW), 1_000_000_000_000_000);
        assert_eq!(to_millis(None, NOW), NOW);
        assert_eq!(to_millis(Some(0.0), NOW), NOW);
        assert_eq!(to_millis(Some(f64::NAN), NOW), NOW);
    }

    #[test]
    fn test_timestamp_is_never_pushed_into_the_future_for_past_values() {
        // Any past instant, expressed either in seconds or in millis, resolves to <= now.
        for past_ms in [NOW - 1, NOW - 60_000, NOW - 86_400_000, 1_000_000_000_001] {
            let secs = (past_ms / 1000) as f64;
            assert!(to_millis(Some(secs), NOW) <= NOW);
            assert!(to_millis(Some(past_ms as f64), NOW) <= NOW);
        }
    }

    #[test]
    fn test_string_timestamps_and_unparseable_values() {
        let i = normalize_at(&json!({"id": 1, "timestamp": "1700000000"}), NOW).unwrap();
        assert_eq!(i.messages[0].created_ms, 1_700_000_000_000);

        let j = normalize_at(&json!({"id": 1, "created": "2024-01-01T00:00:00Z"}), NOW).unwrap();
        assert_eq!(j.messages[0].created_ms, NOW);
    }

    #[test]
    fn test_existing_messages_are_kept_in_order() {
        let i = normalize_at(
            &json!({
                "id": 4,
                "description": "ignored when messages exist",
                "messages": [
                    {"title": "newest", "created": 1_700_000_000, "href": "#"},
                    {"title": "older", "created": 1_600_000_000_000u64}
                ]
            }),
            NOW,
        )
        .unwrap();
        assert_eq!(i.messages.len(), 2);
        assert_eq!(i.latest_message().map(|m| m.title.as_str()), Some("newest"));
        assert_eq!(i.messages[0].created_ms, 1_700_000_000_000);
        assert_eq!(i.messages[1].created_ms, 1_600_000_000_000);
        assert!(i.messages[1].href.is_none());
    }

    #[test]
    fn test_unusable_messages_fall_back_to_description() {
        let i = normalize_at(
            &json!({"id": 7, "description": "d", "timestamp": 1_600_000_000, "messages": [{"created": 1_700_000_000}]}),
            NOW,
        )
        .unwrap();
        assert_eq!(i.messages.len(), 1);
        assert_eq!(i.messages[0].title, "d");
        assert_eq!(i.messages[0].created_ms, 1_600_000_000_000);
        assert_eq!(i.messages[0].href.as_deref(), Some("/ideas/7"));
    }

    #[test]
    fn test_normalize_uses_host_clock() {
        let i = normalize(&json!({"id": 1})).unwrap();
        assert!(i.messages[0].created_ms > 1_600_000_000_000);

        let all = normalize_all(&[json!({"id": 1}), json!({"title": "no id"}), json!({"id": "2"})]);
        assert_eq!(all.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_records_without_integer_id_are_dropped() {
        assert!(normalize_at(&json!({"title": "no id"}), NOW).is_none());
        assert!(normalize_at(&json!({"id": "abc"}), NOW).is_none());
        assert!(normalize_at(&json!({"id": 1.5}), NOW).is_none());
        assert_eq!(normalize_at(&json!({"id": "12"}), NOW).map(|i| i.id), Some(12));
    }

    #[test]
    fn test_launch_params_accept_both_key_styles() {
        let i = normalize_at(
            &json!({
                "id": 1,
                "launch": {
                    "priceEth": 0.1,
                    "funding_goal_eth": "10",
                    "revenueSharePct": 10,
                    "contacts": {"twitter": "@x", "discord": ""}
                }
            }),
            NOW,
        )
        .unwrap();
        let launch = i.launch.expect("launch should parse");
        assert_eq!(launch.price_eth, Some(0.1));
        assert_eq!(launch.funding_goal_eth, Some(10.0));
        assert_eq!(launch.revenue_share_pct, Some(10.0));
        let contacts = launch.contacts.expect("contacts should parse");
        assert_eq!(contacts.twitter.as_deref(), Some("@x"));
        assert!(contacts.discord.is_none());
    }

    #[test]
    fn test_empty_chain_and_deployer_become_none() {
        let i = normalize_at(&json!({"id": 1, "chain": "", "deployer": " "}), NOW).unwrap();
        assert!(i.chain.is_none());
        assert!(i.deployer.is_none());
    }
}
