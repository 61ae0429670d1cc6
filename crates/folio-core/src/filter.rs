//! Tag filtering for the project gallery.
//!
//! Cards carry a comma-separated tag list. The engine derives one filter
//! button per distinct tag and decides which cards are visible for the
//! current active tag and search text.

/// `data-tag` value of the catch-all filter button.
pub const ALL_TAG: &str = "all";

/// The single-select filter criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ActiveTag {
    #[default]
    All,
    Tag(String),
}

impl ActiveTag {
    /// Interpret a `data-tag` attribute value.
    pub fn from_data_tag(value: &str) -> Self {
        let tag = value.trim().to_lowercase();
        if tag == ALL_TAG {
            ActiveTag::All
        } else {
            ActiveTag::Tag(tag)
        }
    }

    /// The `data-tag` value a button needs to be active for this tag.
    pub fn as_data_tag(&self) -> &str {
        match self {
            ActiveTag::All => ALL_TAG,
            ActiveTag::Tag(tag) => tag,
        }
    }
}

/// Split a `data-tags` attribute into normalized tags.
pub fn parse_tags(data_tags: &str) -> Vec<String> {
    data_tags
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Button label for a tag: first character uppercased, the rest unchanged.
pub fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A gallery card, reduced to its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    tags: Vec<String>,
}

impl Card {
    pub fn from_data_tags(data_tags: &str) -> Self {
        Self {
            tags: parse_tags(data_tags),
        }
    }

    fn matches_tag(&self, active: &ActiveTag) -> bool {
        match active {
            ActiveTag::All => true,
            ActiveTag::Tag(tag) => self.tags.iter().any(|t| t == tag),
        }
    }

    fn matches_search(&self, search: &str) -> bool {
        search.is_empty() || self.tags.iter().any(|t| t.contains(search))
    }
}

/// Distinct tags across `cards`, in order of first appearance.
pub fn discover_tags(cards: &[Card]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut tags = Vec::new();
    for tag in cards.iter().flat_map(|c| c.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// A filter button to create in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub tag: String,
    pub label: String,
}

/// Result of evaluating the filters over every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Visibility per card, in card order.
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    pub fn show_no_results(&self) -> bool {
        self.visible_count == 0
    }
}

/// What the page must change after a filter trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterUpdate {
    /// Whether the search box must be emptied.
    pub clear_search: bool,
    /// `data-tag` of the sole active filter button.
    pub active_button: String,
    pub outcome: FilterOutcome,
}

/// Filter state for one gallery.
#[derive(Debug, Clone)]
pub struct TagFilter {
    cards: Vec<Card>,
    active: ActiveTag,
    search: String,
}

impl TagFilter {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            active: ActiveTag::All,
            search: String::new(),
        }
    }

    /// One button per distinct tag.
    pub fn buttons(&self) -> Vec<FilterButton> {
        discover_tags(&self.cards)
            .into_iter()
            .map(|tag| FilterButton {
                label: tag_label(&tag),
                tag,
            })
            .collect()
    }

    /// Whether the button with `data_tag` should carry the active class.
    pub fn is_button_active(&self, data_tag: Option<&str>) -> bool {
        data_tag.is_some_and(|t| t.to_lowercase() == self.active.as_data_tag())
    }

    /// Click on a filter button. `current_search` is the search box text at
    /// click time; it is kept only when switching back to "all".
    pub fn select_filter(&mut self, data_tag: &str, current_search: &str) -> FilterUpdate {
        self.active = ActiveTag::from_data_tag(data_tag);
        let clear_search = self.active != ActiveTag::All;
        if clear_search {
            self.search.clear();
        } else {
            self.search = normalize_search(current_search);
        }
        self.update(clear_search)
    }

    /// Click on a tag badge inside a card. Always clears the search.
    pub fn select_badge(&mut self, data_tag: &str) -> FilterUpdate {
        self.active = ActiveTag::from_data_tag(data_tag);
        self.search.clear();
        self.update(true)
    }

    /// Text typed into the search box. Resets the active tag to "all".
    pub fn set_search(&mut self, text: &str) -> FilterUpdate {
        self.active = ActiveTag::All;
        self.search = normalize_search(text);
        self.update(false)
    }

    /// Evaluate both predicates for every card.
    pub fn apply(&self) -> FilterOutcome {
        let visible: Vec<bool> = self
            .cards
            .iter()
            .map(|card| card.matches_tag(&self.active) && card.matches_search(&self.search))
            .collect();
        let visible_count = visible.iter().filter(|v| **v).count();
        FilterOutcome {
            visible,
            visible_count,
        }
    }

    fn update(&self, clear_search: bool) -> FilterUpdate {
        let outcome = self.apply();
        log::debug!(
            "Filter tag={:?} search={:?}: {} of {} cards visible",
            self.active,
            self.search,
            outcome.visible_count,
            self.cards.len()
        );
        FilterUpdate {
            clear_search,
            active_button: self.active.as_data_tag().to_string(),
            outcome,
        }
    }
}

fn normalize_search(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> TagFilter {
        TagFilter::new(vec![Card::from_data_tags("Go,Web"), Card::from_data_tags("Rust")])
    }

    #[test]
    fn test_parse_tags_normalizes() {
        assert_eq!(parse_tags(" Go , WEB,,rust "), vec!["go", "web", "rust"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label("rust"), "Rust");
        assert_eq!(tag_label("webGL"), "WebGL");
        assert_eq!(tag_label("élan"), "Élan");
        assert_eq!(tag_label(""), "");
    }

    #[test]
    fn test_discover_tags_first_appearance() {
        let cards = vec![
            Card::from_data_tags("Web, Go"),
            Card::from_data_tags("rust,web"),
            Card::from_data_tags("GO"),
        ];
        assert_eq!(discover_tags(&cards), vec!["web", "go", "rust"]);
    }

    #[test]
    fn test_buttons() {
        let buttons = gallery().buttons();
        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Go", "Web", "Rust"]);
        assert_eq!(buttons[0].tag, "go");
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let outcome = gallery().apply();
        assert_eq!(outcome.visible, vec![true, true]);
        assert!(!outcome.show_no_results());
    }

    #[test]
    fn test_select_filter() {
        let mut filter = gallery();
        let update = filter.select_filter("go", "rust");
        assert_eq!(update.outcome.visible, vec![true, false]);
        assert_eq!(update.active_button, "go");
        assert!(update.clear_search);
    }

    #[test]
    fn test_search_with_all() {
        let mut filter = gallery();
        let update = filter.set_search("rust");
        assert_eq!(update.outcome.visible, vec![false, true]);
        assert_eq!(update.outcome.visible_count, 1);
        assert_eq!(update.active_button, ALL_TAG);
        assert!(!update.clear_search);
    }

    #[test]
    fn test_search_is_substring() {
        let mut filter = gallery();
        assert_eq!(filter.set_search("  WE ").outcome.visible, vec![true, false]);
        assert_eq!(filter.set_search("").outcome.visible_count, 2);
    }

    #[test]
    fn test_all_button_uses_current_search_text() {
        let mut filter = TagFilter::new(vec![
            Card::from_data_tags("Go,Web"),
            Card::from_data_tags("Rust,Web"),
        ]);
        filter.select_filter("go", "");
        // Search box text typed before the click is picked up by "all".
        let update = filter.select_filter(ALL_TAG, "  Rust ");
        assert!(!update.clear_search);
        assert_eq!(filter.search, "rust");
        assert_eq!(update.outcome.visible, vec![false, true]);

        let update = filter.select_filter(ALL_TAG, "");
        assert_eq!(update.outcome.visible_count, 2);
    }

    #[test]
    fn test_search_with_no_match_shows_no_results() {
        let mut filter = TagFilter::new(vec![
            Card::from_data_tags("Go,Web"),
            Card::from_data_tags("Rust,Web"),
        ]);
        filter.select_filter("web", "");
        let update = filter.set_search("python");
        assert_eq!(update.active_button, ALL_TAG);
        assert_eq!(update.outcome.visible_count, 0);
        assert!(update.outcome.show_no_results());

        let update = filter.select_filter(ALL_TAG, "python");
        assert!(update.outcome.show_no_results());
    }

    #[test]
    fn test_unknown_tag_shows_no_results() {
        let mut filter = gallery();
        let update = filter.select_badge("python");
        assert!(update.outcome.show_no_results());
    }

    #[test]
    fn test_badge_clears_search() {
        let mut filter = gallery();
        filter.set_search("we");
        let update = filter.select_badge("Rust");
        assert!(update.clear_search);
        assert_eq!(filter.search, "");
        assert_eq!(update.active_button, "rust");
        assert_eq!(update.outcome.visible, vec![false, true]);
    }

    #[test]
    fn test_search_resets_active_tag() {
        let mut filter = gallery();
        filter.select_filter("rust", "");
        filter.set_search("go");
        assert_eq!(filter.active, ActiveTag::All);
        assert!(filter.is_button_active(Some("all")));
        assert!(!filter.is_button_active(Some("rust")));
    }

    #[test]
    fn test_buttons_are_mutually_exclusive() {
        let mut filter = gallery();
        filter.select_filter("web", "");
        let active: Vec<_> = ["all", "go", "web", "rust"]
            .into_iter()
            .filter(|t| filter.is_button_active(Some(t)))
            .collect();
        assert_eq!(active, vec!["web"]);
        assert!(!filter.is_button_active(None));
    }
}
