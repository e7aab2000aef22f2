use crate::models::Idea;

/// Cards per page in the general listing grid.
pub const GRID_PAGE_SIZE: usize = 8;

/// The user-selected filter set. Empty values match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdeaQuery {
    pub category: String,
    pub idea_type: String,
    pub chain: String,
}

impl IdeaQuery {
    pub fn is_empty(&self) -> bool {
        is_wildcard(&self.category) && is_wildcard(&self.idea_type) && is_wildcard(&self.chain)
    }

    /// Category and type match by case-insensitive containment, chain by
    /// case-insensitive equality.
    pub fn matches(&self, idea: &Idea) -> bool {
        contains_ci(&idea.category, &self.category)
            && contains_ci(&idea.idea_type, &self.idea_type)
            && equals_ci(idea.chain.as_deref().unwrap_or_default(), &self.chain)
    }
}

// "all" is what the grid's chip bar sends for the unfiltered state.
fn is_wildcard(q: &str) -> bool {
    let q = q.trim();
    q.is_empty() || q.eq_ignore_ascii_case("all")
}

fn contains_ci(field: &str, query: &str) -> bool {
    is_wildcard(query) || field.to_lowercase().contains(&query.trim().to_lowercase())
}

fn equals_ci(field: &str, query: &str) -> bool {
    is_wildcard(query) || field.trim().to_lowercase() == query.trim().to_lowercase()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub page_items: Vec<Idea>,
    pub total_pages: usize,
    /// The page actually shown after clamping.
    pub page: usize,
    pub total_items: usize,
}

/// Stable filter of `ideas` by `query`, preserving input order.
pub fn filter_ideas<'a>(ideas: &'a [Idea], query: &IdeaQuery) -> Vec<&'a Idea> {
    ideas.iter().filter(|i| query.matches(i)).collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filter then page. The requested page is clamped into `[1, total_pages]`.
pub fn select(ideas: &[Idea], query: &IdeaQuery, page: usize, page_size: usize) -> Selection {
    let page_size = page_size.max(1);
    let filtered = filter_ideas(ideas, query);
    let total = total_pages(filtered.len(), page_size);
    let page = clamp_page(page, total);

    let page_items = filtered
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|i| (*i).clone())
        .collect();

    Selection {
        page_items,
        total_pages: total,
        page,
        total_items: filtered.len(),
    }
}

/// Pagination control state. Changing the active filter set resets to page 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    query: IdeaQuery,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            query: IdeaQuery::default(),
        }
    }
}

impl Pager {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn go(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    /// Steps from the page currently shown, which may be lower than the
    /// stored one if the list shrank.
    pub fn prev(&mut self, total_pages: usize) {
        let shown = clamp_page(self.page, total_pages);
        self.go(shown.saturating_sub(1), total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        let shown = clamp_page(self.page, total_pages);
        self.go(shown.saturating_add(1), total_pages);
    }

    /// Returns true when the filter set changed (and the page was reset).
    pub fn reset_for(&mut self, query: &IdeaQuery) -> bool {
        if &self.query == query {
            return false;
        }
        self.query = query.clone();
        self.page = 1;
        true
    }

    pub fn can_prev(&self, total_pages: usize) -> bool {
        clamp_page(self.page, total_pages) > 1
    }

    pub fn can_next(&self, total_pages: usize) -> bool {
        clamp_page(self.page, total_pages) < total_pages
    }
}

/// Button labels for a pager with `total_pages` pages.
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages.max(1)).collect()
}

/// Distinct, non-empty types in first-seen order.
pub fn distinct_types(ideas: &[Idea]) -> Vec<String> {
    distinct(ideas.iter().map(|i| i.idea_type.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        let v = v.trim();
        if !v.is_empty() && !out.iter().any(|x| x == v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(id: i64, category: &str, idea_type: &str, chain: Option<&str>) -> Idea {
        Idea {
            id,
            name: format!("Idea {id}"),
            icon: "💡".to_string(),
            bg_color: "#fff".to_string(),
            category: category.to_string(),
            idea_type: idea_type.to_string(),
            chain: chain.map(str::to_string),
            deployer: None,
            messages: vec![],
            launch: None,
        }
    }

    fn sample() -> Vec<Idea> {
        vec![
            idea(1, "NFT Ideas", "nft", Some("eth")),
            idea(2, "Free Ideas", "free", Some("ETH")),
            idea(3, "NFT Ideas - Trending", "nft", Some("sol")),
            idea(4, "Trending", "token", Some("ethereum")),
            idea(5, "Free Ideas", "dao", None),
        ]
    }

    fn ids(items: &[Idea]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_query_returns_input_unchanged() {
        let all = sample();
        let sel = select(&all, &IdeaQuery::default(), 1, 100);
        assert_eq!(sel.page_items, all);
        assert!(IdeaQuery::default().is_empty());
    }

    #[test]
    fn test_category_matches_by_substring_case_insensitive() {
        let q = IdeaQuery {
            category: "nft".to_string(),
            ..Default::default()
        };
        let sel = select(&sample(), &q, 1, 100);
        assert_eq!(ids(&sel.page_items), vec![1, 3]);
    }

    #[test]
    fn test_chain_is_exact_and_case_insensitive() {
        let q = IdeaQuery {
            chain: "eth".to_string(),
            ..Default::default()
        };
        let sel = select(&sample(), &q, 1, 100);
        // "ethereum" must not match by substring; ideas without chain never match.
        assert_eq!(ids(&sel.page_items), vec![1, 2]);
    }

    #[test]
    fn test_type_and_all_wildcard() {
        let q = IdeaQuery {
            category: "all".to_string(),
            idea_type: "NF".to_string(),
            chain: String::new(),
        };
        assert_eq!(ids(&select(&sample(), &q, 1, 100).page_items), vec![1, 3]);
    }

    #[test]
    fn test_pagination_twenty_items_page_size_eight() {
        let many: Vec<Idea> = (1..=20).map(|i| idea(i, "Free Ideas", "free", None)).collect();

        let sel = select(&many, &IdeaQuery::default(), 1, GRID_PAGE_SIZE);
        assert_eq!(sel.total_pages, 3);
        assert_eq!(ids(&sel.page_items), (1..=8).collect::<Vec<_>>());

        let last = select(&many, &IdeaQuery::default(), 5, GRID_PAGE_SIZE);
        assert_eq!(last.page, 3);
        assert_eq!(ids(&last.page_items), (17..=20).collect::<Vec<_>>());

        let zero = select(&many, &IdeaQuery::default(), 0, GRID_PAGE_SIZE);
        assert_eq!(zero.page, 1);
    }

    #[test]
    fn test_empty_list_still_has_one_page() {
        let sel = select(&[], &IdeaQuery::default(), 3, GRID_PAGE_SIZE);
        assert_eq!(sel.total_pages, 1);
        assert_eq!(sel.page, 1);
        assert!(sel.page_items.is_empty());
        assert_eq!(page_numbers(sel.total_pages), vec![1]);
    }

    #[test]
    fn test_pager_clamps_and_resets_on_filter_change() {
        let mut pager = Pager::default();
        pager.go(5, 3);
        assert_eq!(pager.page(), 3);
        assert!(!pager.can_next(3));
        pager.prev(3);
        assert_eq!(pager.page(), 2);

        let q = IdeaQuery {
            chain: "sol".to_string(),
            ..Default::default()
        };
        assert!(pager.reset_for(&q));
        assert_eq!(pager.page(), 1);
        assert!(!pager.can_prev(3));

        pager.next(3);
        assert!(!pager.reset_for(&q));
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_pager_steps_from_shown_page_after_list_shrinks() {
        let mut pager = Pager::default();
        pager.go(3, 3);

        // Same filter, but only two pages remain: page 2 is shown.
        assert!(pager.can_prev(2));
        assert!(!pager.can_next(2));
        pager.prev(2);
        assert_eq!(pager.page(), 1);

        pager.go(3, 3);
        pager.next(2);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_distinct_types_keep_first_seen_order() {
        assert_eq!(distinct_types(&sample()), vec!["nft", "free", "token", "dao"]);
        assert!(distinct_types(&[]).is_empty());
    }
}
