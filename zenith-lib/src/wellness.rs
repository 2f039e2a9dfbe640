//! The built-in wellness article library.
//!
//! Articles are static content shipped with the application, not records:
//! nothing here touches the store.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Topic grouping for wellness articles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Nutrition,
    Fitness,
    MentalHealth,
    Sleep,
    Stress,
}

impl Category {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nutrition => "Nutrition",
            Self::Fitness => "Fitness",
            Self::MentalHealth => "Mental Health",
            Self::Sleep => "Sleep",
            Self::Stress => "Stress",
        }
    }
}

/// One article in the wellness library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub emoji: &'static str,
}

pub const LIBRARY: &[Article] = &[
    Article {
        title: "10 Foods for Better Heart Health",
        category: Category::Nutrition,
        summary: "Discover foods that support cardiovascular health including berries, leafy greens, and fatty fish.",
        emoji: "🥗",
    },
    Article {
        title: "Daily Exercise Routine",
        category: Category::Fitness,
        summary: "A simple 30-minute daily exercise routine to improve your overall fitness and well-being.",
        emoji: "💪",
    },
    Article {
        title: "Meditation for Mental Health",
        category: Category::MentalHealth,
        summary: "Learn how meditation can reduce stress and improve your mental well-being.",
        emoji: "🧘",
    },
    Article {
        title: "Sleep Hygiene Tips",
        category: Category::Sleep,
        summary: "Improve your sleep quality with these scientifically-backed sleep hygiene practices.",
        emoji: "😴",
    },
    Article {
        title: "Stress Management Techniques",
        category: Category::Stress,
        summary: "Effective techniques to manage daily stress and improve your quality of life.",
        emoji: "🧘‍♀️",
    },
    Article {
        title: "Hydration and Health",
        category: Category::Nutrition,
        summary: "Why staying hydrated is crucial for your health and how much water you should drink daily.",
        emoji: "💧",
    },
];

/// Articles matching `category` (all of them when `None`) whose title or
/// summary contains `term`, case-insensitively. Library order is preserved.
pub fn search(category: Option<Category>, term: &str) -> Vec<&'static Article> {
    let term = term.to_lowercase();

    LIBRARY
        .iter()
        .filter(|article| category.is_none_or(|category| article.category == category))
        .filter(|article| {
            term.is_empty()
                || article.title.to_lowercase().contains(&term)
                || article.summary.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{Category, LIBRARY, search};

    #[test]
    fn test_search_without_criteria_returns_whole_library() {
        assert_eq!(search(None, ""), LIBRARY.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_search_by_category() {
        let nutrition = search(Some(Category::Nutrition), "");

        assert_eq!(nutrition.len(), 2);
        assert!(
            nutrition
                .iter()
                .all(|article| article.category == Category::Nutrition)
        );
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_summary() {
        let by_title = search(None, "HEART");
        assert_eq!(by_title.len(), 1);
        assert_eq!(
            by_title.first().map(|a| a.title),
            Some("10 Foods for Better Heart Health")
        );

        // "cardiovascular" only appears in a summary
        assert_eq!(search(None, "Cardiovascular").len(), 1);
    }

    #[test]
    fn test_search_with_no_match_is_empty() {
        assert!(search(None, "zzz").is_empty());
        assert!(search(Some(Category::Sleep), "heart").is_empty());
    }
}
