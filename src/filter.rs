//! Rule list filtering
//!
//! Rule cards are grouped into rulesets. Filtering hides every card
//! whose search text does not contain the term, then hides rulesets
//! left without a visible card.

use tracing::debug;

/// A single rule entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCard {
    /// Anchor identifier of the rule
    pub id: String,
    /// Lowercase text searched by the filter
    search: String,
    hidden: bool,
}

impl RuleCard {
    /// Create a card; the haystack is lowercased once here
    pub fn new(id: &str, haystack: &str) -> Self {
        Self {
            id: id.to_string(),
            search: haystack.to_lowercase(),
            hidden: false,
        }
    }

    /// Create a card searchable by any of the given fields
    pub fn from_fields(id: &str, fields: &[&str]) -> Self {
        Self::new(id, &fields.join(" "))
    }

    pub fn haystack(&self) -> &str {
        &self.search
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.search.contains(term)
    }
}

/// A named group of rule cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    pub id: String,
    pub cards: Vec<RuleCard>,
    hidden: bool,
}

impl Ruleset {
    pub fn new(id: &str, cards: Vec<RuleCard>) -> Self {
        Self {
            id: id.to_string(),
            cards,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn visible_cards(&self) -> usize {
        self.cards.iter().filter(|card| !card.hidden).count()
    }
}

/// Filter state over every ruleset on the page
#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    rulesets: Vec<Ruleset>,
}

impl RuleFilter {
    pub fn new(rulesets: Vec<Ruleset>) -> Self {
        Self { rulesets }
    }

    pub fn rulesets(&self) -> &[Ruleset] {
        &self.rulesets
    }

    /// Apply a search term and return the number of visible cards
    ///
    /// The term is trimmed and lowercased; an empty term shows everything.
    pub fn apply(&mut self, term: &str) -> usize {
        let term = term.trim().to_lowercase();

        for ruleset in &mut self.rulesets {
            for card in &mut ruleset.cards {
                card.hidden = !card.matches(&term);
            }
            ruleset.hidden = ruleset.visible_cards() == 0;
        }

        let visible = self.visible_count();
        debug!(term = %term, visible, "filtered rules");
        visible
    }

    /// Number of cards currently shown
    pub fn visible_count(&self) -> usize {
        self.rulesets.iter().map(Ruleset::visible_cards).sum()
    }

    /// Status line shown next to the filter input
    pub fn count_label(&self) -> String {
        format!("{} rules shown", self.visible_count())
    }
}
