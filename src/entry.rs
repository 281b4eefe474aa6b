// 📘 Entry Model - Books and EBooks
//
// "Title, author and price are VALUES (can change), the UUID is IDENTITY (never changes)"
//
// The taxonomy is closed: an entry is either a physical book or an electronic
// book. Both share one rendering path; the electronic variant extends it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

// ============================================================================
// ENTRY KIND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryKind {
    /// Printed book
    Physical,

    /// Electronic book with a download size
    Electronic { file_size_mb: f64 },
}

impl EntryKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntryKind::Physical => "Book",
            EntryKind::Electronic { .. } => "EBook",
        }
    }
}

// ============================================================================
// ENTRY
// ============================================================================

/// A catalog record.
///
/// Construction performs no validation; `Catalog` checks price and file size
/// before anything is stored. There are no public mutators, all changes go
/// through `Catalog::update`.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Stable identity (UUID) - survives every update
    id: String,

    title: String,
    author: String,
    price: f64,

    #[serde(flatten)]
    kind: EntryKind,

    added_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a physical book entry
    pub fn physical(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self::with_kind(title.into(), author.into(), price, EntryKind::Physical)
    }

    /// Create an electronic book entry
    pub fn electronic(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        file_size_mb: f64,
    ) -> Self {
        Self::with_kind(
            title.into(),
            author.into(),
            price,
            EntryKind::Electronic { file_size_mb },
        )
    }

    fn with_kind(title: String, author: String, price: f64, kind: EntryKind) -> Self {
        let now = Utc::now();

        Entry {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            author,
            price,
            kind,
            added_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// File size in MB, electronic entries only
    pub fn file_size_mb(&self) -> Option<f64> {
        match self.kind {
            EntryKind::Physical => None,
            EntryKind::Electronic { file_size_mb } => Some(file_size_mb),
        }
    }

    pub fn is_electronic(&self) -> bool {
        matches!(self.kind, EntryKind::Electronic { .. })
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Case-insensitive match on both title and author
    pub fn matches(&self, title: &str, author: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
            && self.author.to_lowercase() == author.to_lowercase()
    }

    /// Render the entry as a single line
    pub fn display(&self) -> String {
        self.to_string()
    }

    // ========================================================================
    // MUTATION (catalog only)
    // ========================================================================

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub(crate) fn set_author(&mut self, author: String) {
        self.author = author;
        self.touch();
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn fmt_base(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Price: {}",
            self.title, self.author, self.price
        )
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_base(f)?;

        match self.kind {
            EntryKind::Physical => Ok(()),
            EntryKind::Electronic { file_size_mb } => {
                write!(f, ", File Size: {} MB.", file_size_mb)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_entry_creation() {
        let entry = Entry::physical("Dune", "Herbert", 20.0);

        assert!(!entry.id().is_empty());
        assert_eq!(entry.title(), "Dune");
        assert_eq!(entry.author(), "Herbert");
        assert_eq!(entry.price(), 20.0);
        assert_eq!(entry.kind(), &EntryKind::Physical);
        assert_eq!(entry.file_size_mb(), None);
        assert!(!entry.is_electronic());
        assert_eq!(entry.added_at(), entry.updated_at());
    }

    #[test]
    fn test_electronic_entry_creation() {
        let entry = Entry::electronic("Neuromancer", "Gibson", 9.99, 2.5);

        assert!(entry.is_electronic());
        assert_eq!(entry.file_size_mb(), Some(2.5));
        assert_eq!(entry.kind().name(), "EBook");
    }

    #[test]
    fn test_physical_display() {
        let entry = Entry::physical("Dune", "Herbert", 20.0);
        assert_eq!(entry.display(), "Title: Dune, Author: Herbert, Price: 20");

        let entry = Entry::physical("1984", "Orwell", 15.5);
        assert_eq!(entry.to_string(), "Title: 1984, Author: Orwell, Price: 15.5");
    }

    #[test]
    fn test_electronic_display_extends_base() {
        let entry = Entry::electronic("Neuromancer", "Gibson", 9.99, 2.5);
        assert_eq!(
            entry.display(),
            "Title: Neuromancer, Author: Gibson, Price: 9.99, File Size: 2.5 MB."
        );
    }

    #[test]
    fn test_display_dispatches_on_variant() {
        let entries = vec![
            Entry::physical("A", "X", 1.0),
            Entry::electronic("B", "Y", 2.0, 3.0),
        ];

        let rendered: Vec<String> = entries.iter().map(Entry::display).collect();
        assert!(!rendered[0].contains("File Size"));
        assert!(rendered[1].ends_with(", File Size: 3 MB."));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let entry = Entry::physical("War and Peace", "Tolstoy", 12.0);

        assert!(entry.matches("war and peace", "tolstoy"));
        assert!(entry.matches("WAR AND PEACE", "TOLSTOY"));
        assert!(!entry.matches("War and Peace", "Dostoevsky"));
        assert!(!entry.matches("Anna Karenina", "Tolstoy"));
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut entry = Entry::physical("Dune", "Herbert", 20.0);
        let id = entry.id().to_string();

        entry.set_title("Dune Messiah".to_string());
        entry.set_price(22.0);

        assert_eq!(entry.id(), id);
        assert_eq!(entry.title(), "Dune Messiah");
        assert!(entry.updated_at() >= entry.added_at());
    }

    #[test]
    fn test_serialize_entry() {
        let entry = Entry::electronic("Neuromancer", "Gibson", 9.99, 2.5);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["title"], "Neuromancer");
        assert_eq!(json["kind"], "electronic");
        assert_eq!(json["file_size_mb"], 2.5);
    }
}
