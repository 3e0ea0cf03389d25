//! Keyword-based expense categorization.
//!
//! The keyword table is plain data handed to [`Categorizer::new`]; the
//! built-in table is [`CategoryRules::default`].

use serde::{Deserialize, Serialize};

/// Spending categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    /// Restaurants, takeout, coffee.
    Food,
    /// Rent, utilities, household bills.
    Housing,
    /// Supermarket runs.
    Groceries,
    /// Fuel, fares, rides.
    Transport,
    /// Tickets, streaming, nights out.
    Entertainment,
    /// Anything unmatched.
    #[default]
    Other,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Housing,
        Self::Groceries,
        Self::Transport,
        Self::Entertainment,
        Self::Other,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Food => write!(f, "Food"),
            Self::Housing => write!(f, "Housing"),
            Self::Groceries => write!(f, "Groceries"),
            Self::Transport => write!(f, "Transport"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category assigned on a match.
    pub category: Category,
    /// Lowercase keywords; any substring hit matches.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Creates a rule, lowercasing the keywords.
    #[must_use]
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, lowered_title: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_title.contains(keyword.as_str()))
    }
}

/// Ordered keyword table. Earlier rules win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRules(Vec<CategoryRule>);

impl CategoryRules {
    /// Creates a table from rules in priority order.
    #[must_use]
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self(rules)
    }

    /// Rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.0
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self(vec![
            CategoryRule::new(
                Category::Food,
                &["food", "restaurant", "dinner", "lunch", "breakfast", "pizza", "cafe", "coffee"],
            ),
            CategoryRule::new(
                Category::Housing,
                &["rent", "utility", "utilities", "electric", "water", "internet", "wifi"],
            ),
            CategoryRule::new(
                Category::Groceries,
                &["grocery", "groceries", "supermarket", "market"],
            ),
            CategoryRule::new(
                Category::Transport,
                &["uber", "taxi", "gas", "fuel", "bus", "train", "transport", "parking"],
            ),
            CategoryRule::new(
                Category::Entertainment,
                &["movie", "cinema", "concert", "game", "netflix", "spotify", "tickets"],
            ),
        ])
    }
}

/// Assigns a category to an expense title.
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    rules: CategoryRules,
}

impl Categorizer {
    /// Creates a categorizer over the given table.
    #[must_use]
    pub fn new(rules: CategoryRules) -> Self {
        Self { rules }
    }

    /// First rule with a keyword contained in the title, ignoring case.
    /// Falls back to `Other`.
    #[must_use]
    pub fn categorize(&self, title: &str) -> Category {
        let lowered = title.to_lowercase();
        self.rules
            .rules()
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(Category::Other, |rule| rule.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pizza night", Category::Food)]
    #[case("MONTHLY RENT", Category::Housing)]
    #[case("Supermarket haul", Category::Groceries)]
    #[case("Uber to airport", Category::Transport)]
    #[case("Concert tickets", Category::Entertainment)]
    #[case("Birthday gift", Category::Other)]
    #[case("", Category::Other)]
    fn test_default_table(#[case] title: &str, #[case] expected: Category) {
        assert_eq!(Categorizer::default().categorize(title), expected);
    }

    #[test]
    fn test_first_match_wins() {
        // "dinner" (Food) and "movie" (Entertainment) both match
        assert_eq!(
            Categorizer::default().categorize("Dinner and a movie"),
            Category::Food
        );
    }

    #[test]
    fn test_custom_table_is_honored() {
        let rules = CategoryRules::new(vec![
            CategoryRule::new(Category::Entertainment, &["PIZZA"]),
            CategoryRule::new(Category::Food, &["pizza"]),
        ]);
        let categorizer = Categorizer::new(rules);
        assert_eq!(categorizer.categorize("pizza party"), Category::Entertainment);
        assert_eq!(categorizer.categorize("rent"), Category::Other);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("groceries".parse::<Category>(), Ok(Category::Groceries));
        assert_eq!(" Food ".parse::<Category>(), Ok(Category::Food));
        assert!("luxury".parse::<Category>().is_err());
    }
}
