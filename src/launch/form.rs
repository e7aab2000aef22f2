use super::endpoint::{CrowdfundingPayload, LaunchRecord, SocialMedia};
use strum::{Display, EnumIter, EnumString};

pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_ICON_BYTES: u64 = 2 * 1024 * 1024;
pub const MAX_TOKEN_SYMBOL_LEN: usize = 6;
pub const DEFAULT_REVENUE_SHARE: &str = "10";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CrowdfundingMode {
    #[default]
    Nft,
    Token,
    Dao,
    Presale,
}

impl CrowdfundingMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Nft => "NFT Crowdfunding",
            Self::Token => "Token Crowdfunding",
            Self::Dao => "DAO Crowdfunding",
            Self::Presale => "Presale",
        }
    }

    pub fn price_label(self) -> &'static str {
        match self {
            Self::Nft => "NFT Price (ETH)",
            Self::Token => "Token Price (ETH)",
            Self::Dao => "Membership Price (ETH)",
            Self::Presale => "Presale Price (ETH)",
        }
    }

    /// Crowdfunding tool page for ideas launched in this mode.
    pub fn tool_path(self) -> &'static str {
        match self {
            Self::Nft => "/nft-mint",
            Self::Token => "/token-sale",
            Self::Dao => "/dao-governance",
            Self::Presale => "/presale",
        }
    }

    pub fn tool_icon(self) -> &'static str {
        match self {
            Self::Nft => "💎",
            Self::Token => "🪙",
            Self::Dao => "🏛️",
            Self::Presale => "🎯",
        }
    }

    pub fn tool_tagline(self) -> &'static str {
        match self {
            Self::Nft => "Mint supporter NFTs",
            Self::Token => "Buy governance tokens",
            Self::Dao => "Vote on proposals",
            Self::Presale => "Early access deals",
        }
    }

    pub fn tool_name(self) -> &'static str {
        match self {
            Self::Nft => "NFT Minting Hub",
            Self::Token => "Token Sale Hub",
            Self::Dao => "DAO Governance Hub",
            Self::Presale => "Presale Hub",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please connect your wallet")]
    MissingWallet,
    #[error("Please enter idea title")]
    MissingTitle,
    #[error("Please describe your idea")]
    MissingDescription,
    #[error("Description must be at most 1000 characters")]
    DescriptionTooLong,
    #[error("Please upload an icon for your idea")]
    MissingIcon,
    #[error("Please set funding price for your crowdfunding campaign")]
    MissingPrice,
    #[error("Please set token symbol for token crowdfunding")]
    MissingTokenSymbol,
    #[error("Please provide at least one contact method for supporters to reach you")]
    MissingContact,
    #[error("Icon file size must be less than 2MB")]
    IconTooLarge,
    #[error("Please upload an image file")]
    IconNotImage,
}

/// Checked when a file is picked, before it is accepted as the icon.
pub fn validate_icon(size: u64, mime: &str) -> Result<(), FormError> {
    if size > MAX_ICON_BYTES {
        return Err(FormError::IconTooLarge);
    }
    if !mime.starts_with("image/") {
        return Err(FormError::IconNotImage);
    }
    Ok(())
}

/// Selected icon, held in memory until upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// `blob:` URL for the preview, when one was created.
    pub preview_url: Option<String>,
}

impl IconFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchForm {
    pub wallet: String,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub icon: Option<IconFile>,
    pub crowdfunding: bool,
    pub mode: CrowdfundingMode,
    pub price: String,
    pub revenue_share: String,
    pub goal: String,
    pub token_symbol: String,
    pub twitter: String,
    pub discord: String,
    pub telegram: String,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            wallet: String::new(),
            title: String::new(),
            description: String::new(),
            tags: String::new(),
            icon: None,
            crowdfunding: false,
            mode: CrowdfundingMode::default(),
            price: String::new(),
            revenue_share: DEFAULT_REVENUE_SHARE.to_string(),
            goal: String::new(),
            token_symbol: String::new(),
            twitter: String::new(),
            discord: String::new(),
            telegram: String::new(),
        }
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl LaunchForm {
    /// First failing rule wins; the order matches the on-screen field order.
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.wallet) {
            return Err(FormError::MissingWallet);
        }
        if blank(&self.title) {
            return Err(FormError::MissingTitle);
        }
        if blank(&self.description) {
            return Err(FormError::MissingDescription);
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(FormError::DescriptionTooLong);
        }
        if self.icon.is_none() {
            return Err(FormError::MissingIcon);
        }
        if self.crowdfunding {
            if blank(&self.price) {
                return Err(FormError::MissingPrice);
            }
            if self.mode == CrowdfundingMode::Token && blank(&self.token_symbol) {
                return Err(FormError::MissingTokenSymbol);
            }
            if blank(&self.twitter) && blank(&self.discord) && blank(&self.telegram) {
                return Err(FormError::MissingContact);
            }
        }
        Ok(())
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Mode to deploy with, or `None` for a plain registry entry.
    pub fn active_mode(&self) -> Option<CrowdfundingMode> {
        self.crowdfunding.then_some(self.mode)
    }

    /// Payload for deployment; `tx_hash` stays empty until the deploy returns.
    pub fn to_record(&self, icon_hash: &str, timestamp: i64) -> LaunchRecord {
        LaunchRecord {
            creator: self.wallet.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            icon_hash: icon_hash.to_string(),
            tags: self.tag_list(),
            crowdfunding: self.active_mode().map(|mode| CrowdfundingPayload {
                mode: mode.to_string(),
                price: self.price.clone(),
                goal: self.goal.clone(),
                revenue_share: self.revenue_share.clone(),
                token_symbol: self.token_symbol.clone(),
            }),
            social_media: SocialMedia {
                twitter: self.twitter.clone(),
                discord: self.discord.clone(),
                telegram: self.telegram.clone(),
            },
            timestamp,
            tx_hash: String::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn icon() -> IconFile {
        IconFile {
            name: "logo.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0u8; 16],
            preview_url: None,
        }
    }

    fn filled() -> LaunchForm {
        LaunchForm {
            wallet: "0xabc".to_string(),
            title: "Idea".to_string(),
            description: "Describe it".to_string(),
            icon: Some(icon()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let f = LaunchForm::default();
        assert_eq!(f.revenue_share, "10");
        assert_eq!(f.mode, CrowdfundingMode::Nft);
        assert!(!f.crowdfunding);
    }

    #[test]
    fn test_validation_order() {
        let mut f = LaunchForm::default();
        assert_eq!(f.validate(), Err(FormError::MissingWallet));
        f.wallet = "0xabc".to_string();
        assert_eq!(f.validate(), Err(FormError::MissingTitle));
        f.title = "  ".to_string();
        assert_eq!(f.validate(), Err(FormError::MissingTitle));
        f.title = "Idea".to_string();
        assert_eq!(f.validate(), Err(FormError::MissingDescription));
        f.description = "desc".to_string();
        assert_eq!(f.validate(), Err(FormError::MissingIcon));
        f.icon = Some(icon());
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn test_crowdfunding_rules_only_apply_when_enabled() {
        let mut f = filled();
        f.mode = CrowdfundingMode::Token;
        assert_eq!(f.validate(), Ok(()));

        f.crowdfunding = true;
        assert_eq!(f.validate(), Err(FormError::MissingPrice));
        f.price = "0.1".to_string();
        assert_eq!(f.validate(), Err(FormError::MissingTokenSymbol));
        f.token_symbol = "IDEA".to_string();
        assert_eq!(f.validate(), Err(FormError::MissingContact));
        f.discord = "idea#1".to_string();
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn test_description_limit() {
        let mut f = filled();
        f.description = "x".repeat(MAX_DESCRIPTION_LEN);
        assert_eq!(f.validate(), Ok(()));
        f.description.push('x');
        assert_eq!(f.validate(), Err(FormError::DescriptionTooLong));
    }

    #[test]
    fn test_validate_icon() {
        assert_eq!(validate_icon(1024, "image/png"), Ok(()));
        assert_eq!(validate_icon(MAX_ICON_BYTES, "image/svg+xml"), Ok(()));
        assert_eq!(
            validate_icon(MAX_ICON_BYTES + 1, "image/png"),
            Err(FormError::IconTooLarge)
        );
        assert_eq!(
            validate_icon(10, "application/pdf"),
            Err(FormError::IconNotImage)
        );
    }

    #[test]
    fn test_to_record() {
        let mut f = filled();
        f.tags = " DeFi, ,AI ,".to_string();
        let r = f.to_record("QmXabc", 42);
        assert_eq!(r.tags, vec!["DeFi", "AI"]);
        assert_eq!(r.icon_hash, "QmXabc");
        assert!(r.crowdfunding.is_none());
        assert!(r.tx_hash.is_empty());

        f.crowdfunding = true;
        f.mode = CrowdfundingMode::Presale;
        f.price = "0.5".to_string();
        let r = f.to_record("QmXabc", 42);
        let cf = r.crowdfunding.expect("crowdfunding payload");
        assert_eq!(cf.mode, "presale");
        assert_eq!(cf.revenue_share, "10");
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut f = filled();
        f.crowdfunding = true;
        f.revenue_share = "25".to_string();
        f.reset();
        assert_eq!(f, LaunchForm::default());
    }

    #[test]
    fn test_mode_string_forms() {
        assert_eq!(CrowdfundingMode::Dao.to_string(), "dao");
        assert_eq!(
            CrowdfundingMode::from_str("Token").ok(),
            Some(CrowdfundingMode::Token)
        );
        assert_eq!(CrowdfundingMode::Presale.tool_path(), "/presale");
        assert_eq!(CrowdfundingMode::Nft.tool_name(), "NFT Minting Hub");
    }
}
