// src/view.rs
//! Category + free-text filtering over a loaded record set.
//!
//! Pure and eager: the subset is recomputed from (records, category, query)
//! every time, and always keeps the records' base order.

use std::fmt;

use crate::core::fields::CategorySpec;
use crate::core::sanitize::fold;
use crate::specs::Record;

/// Which category tab is active.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    #[default]
    All,
    Key(String),
}

impl CategorySelector {
    /// Parse user input against a closed vocabulary. Blank and "all" select
    /// everything; aliases are honored; unknown keys are `None`.
    pub fn parse(raw: &str, cats: &CategorySpec) -> Option<Self> {
        let t = raw.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("all") {
            return Some(CategorySelector::All);
        }
        cats.canonical(t).map(|k| CategorySelector::Key(s!(k)))
    }

    pub fn matches(&self, categories: &[String]) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Key(k) => categories.iter().any(|c| c == k),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("all"),
            CategorySelector::Key(k) => f.write_str(k),
        }
    }
}

/// Tab strip for a type: `All` first, then the vocabulary in order.
pub fn category_tabs(cats: &CategorySpec) -> Vec<CategorySelector> {
    std::iter::once(CategorySelector::All)
        .chain(cats.allowed.iter().map(|k| CategorySelector::Key(s!(*k))))
        .collect()
}

/// Active filter inputs for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: CategorySelector,
    pub query: String,
}

impl Filter {
    pub fn new(category: CategorySelector, query: impl Into<String>) -> Self {
        Self { category, query: query.into() }
    }

    /// Free-text part alone. Blank queries pass everything.
    pub fn matches_query<R: Record>(&self, record: &R) -> bool {
        let q = fold(&self.query);
        q.is_empty() || fold(&record.search_text()).contains(&q)
    }

    pub fn matches_category<R: Record>(&self, record: &R) -> bool {
        self.category.matches(record.categories())
    }

    /// Category match AND text match.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_category(record) && self.matches_query(record)
    }

    /// Borrowing view over `records`, in their order.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> View<'a, R> {
        let q = fold(&self.query);
        let shown = records
            .iter()
            .filter(|r| self.category.matches(r.categories()))
            .filter(|r| q.is_empty() || fold(&r.search_text()).contains(&q))
            .collect();
        View { total: records.len(), shown }
    }
}

/// Filtered subset plus counts for "showing N of M".
#[derive(Debug)]
pub struct View<'a, R> {
    pub total: usize,
    pub shown: Vec<&'a R>,
}

impl<R> View<'_, R> {
    pub fn is_empty(&self) -> bool { self.shown.is_empty() }

    pub fn summary(&self) -> String {
        format!("Showing {} of {}", self.shown.len(), self.total)
    }
}

impl<R: Record> View<'_, R> {
    /// Display cells for every shown record.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.shown.iter().map(|r| r.cells()).collect()
    }
}
