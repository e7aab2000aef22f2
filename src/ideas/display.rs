/// Relative age label used on cards ("5m ago", "3h ago", "2d ago").
pub fn time_ago(created_ms: i64, now_ms: i64) -> String {
    let diff = (now_ms - created_ms).max(0);
    let minutes = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}

pub fn chain_icon(chain: Option<&str>) -> &'static str {
    match chain.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
        Some("eth") => "⟠",
        Some("sol") => "◎",
        Some("bsc") => "🟡",
        Some("polygon") => "🟣",
        _ => "🔗",
    }
}

pub struct CategoryBadge {
    pub icon: &'static str,
    pub class: &'static str,
}

pub fn category_badge(category: &str) -> CategoryBadge {
    match category {
        "NFT Ideas" => CategoryBadge {
            icon: "💎",
            class: "bg-purple-100 text-purple-800 dark:bg-purple-900/30 dark:text-purple-300",
        },
        "Free Ideas" => CategoryBadge {
            icon: "🆓",
            class: "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300",
        },
        "Trending" => CategoryBadge {
            icon: "🔥",
            class: "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300",
        },
        _ => CategoryBadge {
            icon: "💡",
            class: "bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-300",
        },
    }
}

/// `0x1234…5678` style shortening; short inputs are returned as-is.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.trim().chars().collect();
    if chars.len() <= 10 {
        return chars.into_iter().collect();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// URLs, data URIs and site paths render as images. Everything else, bare
/// IPFS hashes included, is shown as text.
pub fn icon_is_image(icon: &str) -> bool {
    let icon = icon.trim();
    icon.starts_with("http://")
        || icon.starts_with("https://")
        || icon.starts_with("data:image/")
        || icon.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_time_ago_buckets() {
        assert_eq!(time_ago(NOW - 60_000, NOW), "1m ago");
        assert_eq!(time_ago(NOW - 59 * 60_000, NOW), "59m ago");
        assert_eq!(time_ago(NOW - 2 * 3_600_000, NOW), "2h ago");
        assert_eq!(time_ago(NOW - 3 * 86_400_000, NOW), "3d ago");
        // Future timestamps clamp to "just now".
        assert_eq!(time_ago(NOW + 10_000, NOW), "0m ago");
    }

    #[test]
    fn test_chain_icons() {
        assert_eq!(chain_icon(Some("ETH")), "⟠");
        assert_eq!(chain_icon(Some("polygon")), "🟣");
        assert_eq!(chain_icon(Some("avax")), "🔗");
        assert_eq!(chain_icon(None), "🔗");
    }

    #[test]
    fn test_category_badge_defaults_for_free_text() {
        assert_eq!(category_badge("Trending").icon, "🔥");
        assert_eq!(category_badge("something else").icon, "💡");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x1234567890abcdef1234567890ABCDEF12345678"),
            "0x1234…5678"
        );
        assert_eq!(short_address("SoLana"), "SoLana");
    }

    #[test]
    fn test_icon_is_image() {
        assert!(icon_is_image("https://cdn.example.com/a.png"));
        assert!(icon_is_image("/uploads/a.png"));
        assert!(!icon_is_image("🚀"));
        assert!(!icon_is_image("QmXabc123def4567"));
    }
}
