//! Category color palette.

use serde::{Deserialize, Serialize};

use crate::event::Category;

/// A display color token.
///
/// The host's toolkit decides what a token actually looks like; the core
/// only guarantees that the mapping from category is stable and that no
/// two categories share a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Brand,
    Green,
    Yellow,
    Purple,
    /// Fallback for anything without a known category
    Neutral,
}

impl Color {
    /// Design-token name understood by the rendering layer.
    pub fn token(&self) -> &'static str {
        match self {
            Color::Brand => "brand-background-2",
            Color::Green => "green-background-2",
            Color::Yellow => "yellow-background-2",
            Color::Purple => "purple-background-2",
            Color::Neutral => "neutral-background-3",
        }
    }
}

impl Category {
    /// Display color for this category.
    ///
    /// Total over the closed category set and injective: each category has
    /// its own color so glyphs stay visually distinguishable.
    pub fn color(&self) -> Color {
        match self {
            Category::Work => Color::Brand,
            Category::Personal => Color::Green,
            Category::Holiday => Color::Yellow,
            Category::Meeting => Color::Purple,
        }
    }
}

/// Color for a possibly-missing category.
pub fn color_or_neutral(category: Option<Category>) -> Color {
    category.map(|c| c.color()).unwrap_or(Color::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_is_injective_over_known_categories() {
        let categories = [
            Category::Work,
            Category::Personal,
            Category::Holiday,
            Category::Meeting,
        ];
        let colors: HashSet<Color> = categories.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), categories.len());
    }

    #[test]
    fn missing_category_falls_back_to_neutral() {
        assert_eq!(color_or_neutral(None), Color::Neutral);
        assert_eq!(color_or_neutral(Some(Category::Work)), Color::Brand);
    }

    #[test]
    fn tokens_are_distinct() {
        let tokens: HashSet<&str> = [
            Color::Brand,
            Color::Green,
            Color::Yellow,
            Color::Purple,
            Color::Neutral,
        ]
        .iter()
        .map(|c| c.token())
        .collect();
        assert_eq!(tokens.len(), 5);
    }
}
