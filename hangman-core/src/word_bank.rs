use rand::Rng;

use crate::Catalog;

/// A freshly selected puzzle: the secret word, its category and hint.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub category: String,
    pub word: String,
    pub hint: String,
}

/// Read-only view over the catalog that hands out puzzles.
///
/// Selection is uniform over categories, then uniform over that category's
/// words. The catalog is validated at construction, so selection has no
/// failure modes.
#[derive(Debug, Clone)]
pub struct WordBank {
    catalog: Catalog,
}

impl WordBank {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn select_puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let category_index = rng.random_range(0..self.catalog.category_count());
        let (category, entries) = self
            .catalog
            .categories()
            .nth(category_index)
            .unwrap_or_else(|| unreachable!("catalog validated non-empty"));

        let entry = &entries[rng.random_range(0..entries.len())];

        Puzzle {
            category: category.to_string(),
            word: entry.word.clone(),
            hint: entry.hint.clone(),
        }
    }
}
