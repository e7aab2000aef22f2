//! Built-in sample ideas served when `EnvConfig.use_mock` is on.
//!
//! Records are shaped like raw backend output so they travel through the
//! same normalizer as real responses.

use super::{IdeaFilter, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::ideas::filter::{select, IdeaQuery};
use crate::ideas::normalize::normalize_at;
use crate::models::Idea;
use crate::util::now_ms;
use serde_json::{json, Value};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

pub(crate) fn raw_ideas(now: i64) -> Vec<Value> {
    let entry = |id: i64,
                 name: &str,
                 icon: &str,
                 bg: &str,
                 title: &str,
                 ago_ms: i64,
                 category: &str,
                 idea_type: &str,
                 chain: &str,
                 deployer: &str| {
        json!({
            "id": id,
            "name": name,
            "icon": icon,
            "bg_color": bg,
            "messages": [{ "title": title, "created": now - ago_ms, "href": format!("/ideas/{id}") }],
            "category": category,
            "type": idea_type,
            "chain": chain,
            "deployer": deployer,
        })
    };

    let mut first = entry(
        1,
        "SOL SZN",
        "🪪",
        "#e8f0ff",
        "Blockchain-verified business card system for Web3 professionals",
        MINUTE_MS,
        "NFT Ideas",
        "nft",
        "eth",
        "0x1234567890abcdef1234567890ABCDEF12345678",
    );
    first["launch"] = json!({
        "priceEth": 0.1,
        "fundingGoalEth": 10,
        "revenueSharePct": 10,
        "contacts": { "twitter": "@solszn", "discord": "solszn#1234", "telegram": "@solszn" }
    });

    vec![
        first,
        entry(
            2,
            "Pump It Hard",
            "🚀",
            "#eefde7",
            "Growth hacking platform with tokenized rewards",
            5 * MINUTE_MS,
            "Free Ideas",
            "free",
            "eth",
            "0x1111111111111111111111111111111111111111",
        ),
        entry(
            3,
            "Loan Agreement",
            "📄",
            "#fff7e6",
            "Smart contract template generator with NFT certificates",
            30 * MINUTE_MS,
            "NFT Ideas",
            "nft",
            "sol",
            "SoLanaOwnerAddress",
        ),
        entry(
            4,
            "NTO",
            "🧾",
            "#f1f5f9",
            "Real-world asset tokenization for invoice clearing",
            2 * HOUR_MS,
            "NFT Ideas",
            "nft",
            "polygon",
            "0x2222222222222222222222222222222222222222",
        ),
        entry(
            5,
            "SOLCAR",
            "🚗",
            "#e6f7ff",
            "Ride-sharing loyalty points on blockchain",
            3 * HOUR_MS,
            "Free Ideas",
            "free",
            "bsc",
            "0x3333333333333333333333333333333333333333",
        ),
        entry(
            6,
            "MLO",
            "🏥",
            "#f0fdf4",
            "Medical equipment rental marketplace with verified ownership",
            24 * HOUR_MS,
            "Free Ideas",
            "free",
            "polygon",
            "0x4444444444444444444444444444444444444444",
        ),
        entry(
            7,
            "Memeland",
            "🧸",
            "#fff1f2",
            "Meme generator with NFT ownership and royalties",
            40 * MINUTE_MS,
            "Trending",
            "nft",
            "sol",
            "SoLanaOwnerAddress2",
        ),
        entry(
            8,
            "Green Fund",
            "🌱",
            "#ecfeff",
            "Sustainable investment tracking with carbon credit NFTs",
            15 * MINUTE_MS,
            "NFT Ideas",
            "nft",
            "eth",
            "0x5555555555555555555555555555555555555555",
        ),
        entry(
            9,
            "Builder DAO",
            "🏛️",
            "#eef2ff",
            "Community treasury that funds open-source tooling",
            6 * HOUR_MS,
            "Trending",
            "dao",
            "eth",
            "0x6666666666666666666666666666666666666666",
        ),
        entry(
            10,
            "Early Bird",
            "🐦",
            "#fefce8",
            "Presale access passes for indie game studios",
            2 * 24 * HOUR_MS,
            "Free Ideas",
            "presale",
            "bsc",
            "0x7777777777777777777777777777777777777777",
        ),
        entry(
            11,
            "Creator Coin",
            "🪙",
            "#fdf2f8",
            "Social tokens that share revenue with early supporters",
            45 * MINUTE_MS,
            "Trending",
            "token",
            "sol",
            "SoLanaOwnerAddress3",
        ),
    ]
}

pub(crate) fn ideas_at(now: i64) -> Vec<Idea> {
    raw_ideas(now)
        .iter()
        .filter_map(|r| normalize_at(r, now))
        .collect()
}

/// Emulates the backend listing: same matching rules, `page`/`limit` paging.
pub(crate) fn query_ideas_at(filter: &IdeaFilter, now: i64) -> Vec<Idea> {
    let query = IdeaQuery {
        category: filter.category.clone().unwrap_or_default(),
        idea_type: filter.idea_type.clone().unwrap_or_default(),
        chain: filter.chain.clone().unwrap_or_default(),
    };
    let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).max(1) as usize;
    let page = filter.page.unwrap_or(DEFAULT_PAGE).max(1) as usize;

    let all = ideas_at(now);
    let sel = select(&all, &query, page, limit);
    // Past the last page the backend returns nothing rather than clamping.
    if sel.page != page {
        return Vec::new();
    }
    sel.page_items
}

pub(crate) fn query_ideas(filter: &IdeaFilter) -> Vec<Idea> {
    query_ideas_at(filter, now_ms())
}

pub(crate) fn find_idea(id: i64) -> Option<Idea> {
    ideas_at(now_ms()).into_iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_every_mock_record_normalizes() {
        assert_eq!(ideas_at(NOW).len(), raw_ideas(NOW).len());
    }

    #[test]
    fn test_mock_listing_applies_backend_filters() {
        let f = IdeaFilter {
            chain: Some("sol".to_string()),
            ..Default::default()
        };
        let ids: Vec<i64> = query_ideas_at(&f, NOW).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 7, 11]);
    }

    #[test]
    fn test_mock_listing_pages_and_stops_past_the_end() {
        let f = IdeaFilter {
            page: Some(2),
            limit: Some(8),
            ..Default::default()
        };
        assert_eq!(query_ideas_at(&f, NOW).len(), 3);

        let f = IdeaFilter {
            page: Some(9),
            limit: Some(8),
            ..Default::default()
        };
        assert!(query_ideas_at(&f, NOW).is_empty());
    }

    #[test]
    fn test_mock_first_record_carries_launch_params() {
        let first = ideas_at(NOW).into_iter().next().expect("mock data is not empty");
        let launch = first.launch.expect("first mock idea has launch params");
        assert_eq!(launch.price_eth, Some(0.1));
        assert_eq!(first.messages[0].created_ms, NOW - MINUTE_MS);
    }
}
