//! Corpus store: an explicit, constructed-once collection of exemplars.
//!
//! The store is built once per process from the corpus file and passed by
//! reference to the pipeline. There is no reload or invalidation — restart
//! the process to pick up corpus changes. Because it is never mutated after
//! load, concurrent readers need no locking.

use crate::core::category::Category;
use crate::corpus::entities::Exemplar;

/// Default number of exemplars embedded in a few-shot prompt
pub const DEFAULT_EXEMPLAR_LIMIT: usize = 3;

/// Immutable, insertion-ordered collection of labeled exemplars
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    exemplars: Vec<Exemplar>,
}

impl CorpusStore {
    pub fn new(exemplars: Vec<Exemplar>) -> Self {
        Self { exemplars }
    }

    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exemplar> {
        self.exemplars.iter()
    }

    /// Select up to `limit` exemplars for a category.
    ///
    /// Pure function of the store and its arguments:
    /// - items whose category matches, in corpus order (insertion order is
    ///   the tie-break; there is no scoring),
    /// - or, when the category has zero matches, the first `limit` items of
    ///   the whole corpus so the synthesizer still gets few-shot context,
    /// - or an empty slice only when the corpus itself is empty (downstream
    ///   tolerates zero-shot operation).
    pub fn select(&self, category: Category, limit: usize) -> Vec<&Exemplar> {
        let matches: Vec<&Exemplar> = self
            .exemplars
            .iter()
            .filter(|e| e.category == category)
            .take(limit)
            .collect();

        if !matches.is_empty() {
            return matches;
        }
        self.head(limit)
    }

    /// The first `limit` exemplars in corpus order, regardless of category.
    ///
    /// Also used directly when no category is known yet.
    pub fn head(&self, limit: usize) -> Vec<&Exemplar> {
        self.exemplars.iter().take(limit).collect()
    }

    /// Exemplar counts per category, in presentation order, skipping
    /// categories with no exemplars.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .filter_map(|c| {
                let count = self.exemplars.iter().filter(|e| e.category == *c).count();
                (count > 0).then_some((*c, count))
            })
            .collect()
    }
}
