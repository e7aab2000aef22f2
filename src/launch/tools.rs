//! Simulated crowdfunding actions behind the tool pages: the demo catalogs,
//! pricing and progress math, and the mint / buy / vote / reserve
//! transactions run through [`SimulatedDeployer`].

use super::deploy::{DeploymentKind, SimulatedDeployer, TxHash};
use crate::util::random_hex;
use strum::Display;

/// Upper bound for NFTs per mint and presale units per order.
pub const MAX_UNITS: u32 = 10;
pub const PURCHASE_DELAY_MS: u32 = 3_000;
pub const VOTE_DELAY_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("Please connect your wallet first")]
    WalletRequired,
    #[error("Please enter a valid ETH amount")]
    InvalidAmount,
    #[error("Voting has closed on proposal {0}")]
    ProposalClosed(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NftProject {
    pub id: u32,
    pub title: &'static str,
    pub creator: &'static str,
    pub price_eth: f64,
    pub total_supply: u32,
    pub minted: u32,
    pub royalty: u32,
    pub contract: &'static str,
}

impl NftProject {
    pub fn mint_cost(&self, units: u32) -> f64 {
        self.price_eth * f64::from(units)
    }

    pub fn progress(&self) -> f64 {
        percent(f64::from(self.minted), f64::from(self.total_supply))
    }

    /// What a supporter receives for `units` NFTs.
    pub fn benefits(&self, units: u32) -> Vec<String> {
        vec![
            format!("{units} unique NFT{} with proof of support", plural(units)),
            format!("{}% of future project revenue", self.royalty),
            "Governance voting rights".to_string(),
            "Tradeable on NFT marketplaces".to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenProject {
    pub id: u32,
    pub title: &'static str,
    pub symbol: &'static str,
    pub creator: &'static str,
    pub description: &'static str,
    pub price_eth: f64,
    pub total_supply: u64,
    pub sold: u64,
    /// Share of the supply offered in this sale, in percent.
    pub allocation: u32,
    pub vesting: &'static str,
    pub contract: &'static str,
}

impl TokenProject {
    pub fn tokens_for(&self, eth: f64) -> f64 {
        if self.price_eth > 0.0 {
            eth / self.price_eth
        } else {
            0.0
        }
    }

    /// Progress against the sale allocation, not the full supply.
    pub fn progress(&self) -> f64 {
        let offered = self.total_supply as f64 * f64::from(self.allocation) / 100.0;
        percent(self.sold as f64, offered)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dao {
    pub id: u32,
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
    pub members: u32,
    pub voting_power: u64,
    pub treasury: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub proposer: &'static str,
    pub status: ProposalStatus,
    pub votes_for: u64,
    pub votes_against: u64,
    pub ends: &'static str,
    pub category: &'static str,
}

impl Proposal {
    pub fn total_votes(&self) -> u64 {
        self.votes_for + self.votes_against
    }

    pub fn for_pct(&self) -> f64 {
        percent(self.votes_for as f64, self.total_votes() as f64)
    }

    pub fn against_pct(&self) -> f64 {
        percent(self.votes_against as f64, self.total_votes() as f64)
    }

    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Active
    }

    /// Add a ballot of weight `power` to the tally.
    pub fn record_vote(&mut self, support: bool, power: u64) {
        if support {
            self.votes_for += power;
        } else {
            self.votes_against += power;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresaleProject {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub product_type: &'static str,
    pub original_price: f64,
    pub presale_price: f64,
    pub discount: u32,
    pub total_slots: u32,
    pub sold_slots: u32,
    pub delivery: &'static str,
    pub features: &'static [&'static str],
    pub contract: &'static str,
}

impl PresaleProject {
    pub fn cost(&self, qty: u32) -> f64 {
        self.presale_price * f64::from(qty)
    }

    pub fn savings(&self, qty: u32) -> f64 {
        (self.original_price - self.presale_price) * f64::from(qty)
    }

    pub fn progress(&self) -> f64 {
        percent(f64::from(self.sold_slots), f64::from(self.total_slots))
    }

    pub fn slots_left(&self) -> u32 {
        self.total_slots.saturating_sub(self.sold_slots)
    }
}

pub fn nft_projects() -> Vec<NftProject> {
    vec![
        NftProject {
            id: 1,
            title: "AI Art Generator",
            creator: "0x1234...5678",
            price_eth: 0.004,
            total_supply: 2500,
            minted: 150,
            royalty: 10,
            contract: "0xabcd...1234",
        },
        NftProject {
            id: 2,
            title: "DeFi Yield Optimizer",
            creator: "0x5678...9012",
            price_eth: 0.01,
            total_supply: 1000,
            minted: 45,
            royalty: 15,
            contract: "0xefgh...5678",
        },
    ]
}

pub fn token_projects() -> Vec<TokenProject> {
    vec![
        TokenProject {
            id: 1,
            title: "GameFi Protocol",
            symbol: "GAME",
            creator: "0x1234...5678",
            description: "Revolutionary gaming protocol with play-to-earn mechanics",
            price_eth: 0.001,
            total_supply: 1_000_000,
            sold: 150_000,
            allocation: 30,
            vesting: "6 months",
            contract: "0xgame...1234",
        },
        TokenProject {
            id: 2,
            title: "Green Energy DAO",
            symbol: "GREEN",
            creator: "0x5678...9012",
            description: "Decentralized renewable energy investment platform",
            price_eth: 0.002,
            total_supply: 500_000,
            sold: 75_000,
            allocation: 25,
            vesting: "12 months",
            contract: "0xgreen...5678",
        },
    ]
}

pub fn daos() -> Vec<Dao> {
    vec![
        Dao {
            id: 1,
            name: "EcoTech DAO",
            symbol: "ECO",
            description: "Sustainable technology development collective",
            members: 1250,
            voting_power: 500_000,
            treasury: "125.5",
        },
        Dao {
            id: 2,
            name: "CreatorSpace DAO",
            symbol: "CREATE",
            description: "Digital content creators collaboration platform",
            members: 890,
            voting_power: 350_000,
            treasury: "89.2",
        },
    ]
}

pub fn proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: 1,
            title: "Allocate 50 ETH for Green Energy Research",
            description: "Proposal to fund renewable energy research project focusing on solar panel efficiency improvements. This initiative aims to develop next-generation photovoltaic technology.",
            proposer: "0x1234...5678",
            status: ProposalStatus::Active,
            votes_for: 125_000,
            votes_against: 45_000,
            ends: "2024-01-15",
            category: "Funding",
        },
        Proposal {
            id: 2,
            title: "Update Governance Parameters",
            description: "Modify voting period from 7 days to 5 days and reduce proposal threshold to 1000 tokens to increase participation efficiency.",
            proposer: "0x5678...9012",
            status: ProposalStatus::Active,
            votes_for: 89_000,
            votes_against: 67_000,
            ends: "2024-01-12",
            category: "Governance",
        },
        Proposal {
            id: 3,
            title: "Partnership with Climate Foundation",
            description: "Establish strategic partnership with Global Climate Foundation for carbon offset verification and environmental impact tracking.",
            proposer: "0x9012...3456",
            status: ProposalStatus::Passed,
            votes_for: 198_000,
            votes_against: 32_000,
            ends: "2024-01-08",
            category: "Partnership",
        },
    ]
}

pub fn presale_projects() -> Vec<PresaleProject> {
    vec![
        PresaleProject {
            id: 1,
            title: "AI Code Assistant Pro",
            description: "Advanced AI-powered development tool with multi-language support and intelligent code completion",
            product_type: "Software License",
            original_price: 0.2,
            presale_price: 0.12,
            discount: 40,
            total_slots: 1000,
            sold_slots: 234,
            delivery: "2024-03-15",
            features: &[
                "Lifetime license included",
                "Priority customer support",
                "Early access to new features",
                "Custom AI model training",
                "API access for integration",
            ],
            contract: "0xcode...1234",
        },
        PresaleProject {
            id: 2,
            title: "DeFi Portfolio Tracker",
            description: "Professional-grade portfolio management tool for DeFi investments with real-time analytics",
            product_type: "SaaS Subscription",
            original_price: 0.1,
            presale_price: 0.07,
            discount: 30,
            total_slots: 500,
            sold_slots: 89,
            delivery: "2024-02-28",
            features: &[
                "12 months premium subscription",
                "Advanced analytics dashboard",
                "Portfolio optimization AI",
                "Risk assessment tools",
                "Multi-chain support",
            ],
            contract: "0xdefi...5678",
        },
        PresaleProject {
            id: 3,
            title: "NFT Creator Studio",
            description: "Complete NFT creation and minting platform with advanced design tools and marketplace integration",
            product_type: "Platform Access",
            original_price: 0.15,
            presale_price: 0.105,
            discount: 30,
            total_slots: 750,
            sold_slots: 156,
            delivery: "2024-04-01",
            features: &[
                "Unlimited NFT creation",
                "Advanced design templates",
                "Automated metadata generation",
                "Multi-marketplace listing",
                "Royalty management system",
            ],
            contract: "0xnft...9012",
        },
    ]
}

/// `part / whole` as a percentage capped at 100; zero when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    (part / whole * 100.0).clamp(0.0, 100.0)
}

/// Parse a unit count, clamped to `1..=MAX_UNITS`. Garbage reads as 1.
pub fn clamp_units(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .unwrap_or(1)
        .clamp(1, MAX_UNITS)
}

/// Parse a positive ETH amount.
pub fn parse_eth(raw: &str) -> Result<f64, ToolError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ToolError::InvalidAmount),
    }
}

pub fn require_wallet(wallet: Option<&str>) -> Result<&str, ToolError> {
    match wallet.map(str::trim) {
        Some(w) if !w.is_empty() => Ok(w),
        _ => Err(ToolError::WalletRequired),
    }
}

/// Voting power granted on connect, in `1000..6000`.
pub fn voting_power_from(entropy: u16) -> u64 {
    1_000 + u64::from(entropy % 5_000)
}

pub fn draw_voting_power() -> u64 {
    let entropy = u16::from_str_radix(&random_hex(2), 16).unwrap_or_default();
    voting_power_from(entropy)
}

pub fn explorer_url(tx: &str) -> String {
    format!("https://etherscan.io/tx/{tx}")
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// One user action on a tool page, validated and ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolAction {
    Mint { project: NftProject, units: u32 },
    Buy { project: TokenProject, eth: f64 },
    Vote { proposal: Proposal, support: bool },
    Reserve { project: PresaleProject, qty: u32 },
}

impl ToolAction {
    pub fn kind(&self) -> DeploymentKind {
        match self {
            Self::Mint { .. } => DeploymentKind::Nft,
            Self::Buy { .. } => DeploymentKind::Token,
            Self::Vote { .. } => DeploymentKind::Dao,
            Self::Reserve { .. } => DeploymentKind::Presale,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match self {
            Self::Vote { .. } => VOTE_DELAY_MS,
            _ => PURCHASE_DELAY_MS,
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Self::Mint { project, units } => format!(
                "Successfully minted {units} NFT(s) for {:.4} ETH!",
                project.mint_cost(*units)
            ),
            Self::Buy { project, eth } => format!(
                "Successfully purchased {:.0} {} tokens!",
                project.tokens_for(*eth),
                project.symbol
            ),
            Self::Vote { proposal, support } => format!(
                "Vote {} proposal {} submitted successfully!",
                if *support { "FOR" } else { "AGAINST" },
                proposal.id
            ),
            Self::Reserve { project, qty } => format!(
                "Successfully purchased {qty} {}(s) for {:.3} ETH!",
                project.product_type,
                project.cost(*qty)
            ),
        }
    }

    fn check(&self) -> Result<(), ToolError> {
        match self {
            Self::Buy { eth, .. } if !(eth.is_finite() && *eth > 0.0) => {
                Err(ToolError::InvalidAmount)
            }
            Self::Vote { proposal, .. } if !proposal.is_open() => {
                Err(ToolError::ProposalClosed(proposal.id))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolReceipt {
    pub tx_hash: TxHash,
    pub message: String,
}

/// Run `action` for the connected `wallet`. Nothing is sent without a wallet.
pub async fn execute(
    deployer: &SimulatedDeployer,
    wallet: Option<&str>,
    action: &ToolAction,
) -> Result<ToolReceipt, ToolError> {
    let from = require_wallet(wallet)?;
    action.check()?;

    log::debug!("{} action from {from}", action.kind());
    let tx_hash = deployer.transact(action.kind(), action.delay_ms()).await;
    log::info!("simulated {} tx {tx_hash}", action.kind());
    Ok(ToolReceipt {
        tx_hash,
        message: action.success_message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_catalog_progress() {
        let nft = nft_projects();
        assert!(close(nft[0].progress(), 6.0));
        assert!(close(nft[1].progress(), 4.5));

        // 150k sold of a 30% allocation of 1M.
        let tokens = token_projects();
        assert!(close(tokens[0].progress(), 50.0));
        assert!(close(tokens[1].progress(), 60.0));

        let presale = presale_projects();
        assert!(close(presale[0].progress(), 23.4));
        assert_eq!(presale[0].slots_left(), 766);
    }

    #[test]
    fn test_costs_and_formatting() {
        let nft = &nft_projects()[0];
        assert_eq!(format!("{:.4}", nft.mint_cost(3)), "0.0120");

        let token = &token_projects()[0];
        assert_eq!(format!("{:.0}", token.tokens_for(0.1)), "100");

        let presale = &presale_projects()[0];
        assert_eq!(format!("{:.3}", presale.cost(2)), "0.240");
        assert_eq!(format!("{:.3}", presale.savings(2)), "0.160");
    }

    #[test]
    fn test_units_and_amount_parsing() {
        assert_eq!(clamp_units("3"), 3);
        assert_eq!(clamp_units("0"), 1);
        assert_eq!(clamp_units("42"), MAX_UNITS);
        assert_eq!(clamp_units("abc"), 1);

        assert_eq!(parse_eth(" 0.5 "), Ok(0.5));
        assert_eq!(parse_eth("0"), Err(ToolError::InvalidAmount));
        assert_eq!(parse_eth("-1"), Err(ToolError::InvalidAmount));
        assert_eq!(parse_eth(""), Err(ToolError::InvalidAmount));
    }

    #[test]
    fn test_vote_tally() {
        let mut p = proposals().remove(0);
        assert_eq!(p.total_votes(), 170_000);
        assert!(close(p.for_pct() + p.against_pct(), 100.0));

        p.record_vote(false, 30_000);
        assert_eq!(p.votes_against, 75_000);
        assert_eq!(p.total_votes(), 200_000);
        assert!(close(p.for_pct(), 62.5));

        let empty = Proposal { votes_for: 0, votes_against: 0, ..p };
        assert_eq!(empty.for_pct(), 0.0);
    }

    #[test]
    fn test_voting_power_range() {
        assert_eq!(voting_power_from(0), 1_000);
        assert_eq!(voting_power_from(4_999), 5_999);
        assert_eq!(voting_power_from(u16::MAX), 1_000 + 65_535 % 5_000);
        let drawn = draw_voting_power();
        assert!((1_000..6_000).contains(&drawn));
    }

    #[test]
    fn test_actions_need_a_wallet() {
        let action = ToolAction::Mint {
            project: nft_projects().remove(0),
            units: 2,
        };
        let d = SimulatedDeployer::instant();
        assert_eq!(
            block_on(execute(&d, None, &action)),
            Err(ToolError::WalletRequired)
        );
        assert_eq!(
            block_on(execute(&d, Some("  "), &action)),
            Err(ToolError::WalletRequired)
        );
    }

    #[test]
    fn test_closed_proposal_rejects_votes() {
        let passed = proposals().remove(2);
        let d = SimulatedDeployer::instant();
        let res = block_on(execute(
            &d,
            Some("0xabc"),
            &ToolAction::Vote { proposal: passed, support: true },
        ));
        assert_eq!(res, Err(ToolError::ProposalClosed(3)));
    }

    #[test]
    fn test_execute_returns_tagged_tx_and_message() {
        let d = SimulatedDeployer::instant();

        let mint = ToolAction::Mint {
            project: nft_projects().remove(0),
            units: 2,
        };
        let r = block_on(execute(&d, Some("0xabc"), &mint)).expect("mint");
        assert!(r.tx_hash.starts_with("0xnft"));
        assert_eq!(r.message, "Successfully minted 2 NFT(s) for 0.0080 ETH!");

        let buy = ToolAction::Buy {
            project: token_projects().remove(1),
            eth: 0.1,
        };
        let r = block_on(execute(&d, Some("0xabc"), &buy)).expect("buy");
        assert!(r.tx_hash.starts_with("0xtoken"));
        assert_eq!(r.message, "Successfully purchased 50 GREEN tokens!");

        let vote = ToolAction::Vote {
            proposal: proposals().remove(1),
            support: false,
        };
        let r = block_on(execute(&d, Some("0xabc"), &vote)).expect("vote");
        assert!(r.tx_hash.starts_with("0xdao"));
        assert_eq!(r.message, "Vote AGAINST proposal 2 submitted successfully!");

        let reserve = ToolAction::Reserve {
            project: presale_projects().remove(2),
            qty: 1,
        };
        let r = block_on(execute(&d, Some("0xabc"), &reserve)).expect("reserve");
        assert!(r.tx_hash.starts_with("0xpresale"));
        assert_eq!(
            r.message,
            "Successfully purchased 1 Platform Access(s) for 0.105 ETH!"
        );
    }

    #[test]
    fn test_benefits_and_explorer_link() {
        let nft = &nft_projects()[1];
        let b = nft.benefits(1);
        assert_eq!(b[0], "1 unique NFT with proof of support");
        assert_eq!(b[1], "15% of future project revenue");
        assert_eq!(nft.benefits(3)[0], "3 unique NFTs with proof of support");
        assert_eq!(explorer_url("0xab"), "https://etherscan.io/tx/0xab");
    }
}
