// 🏛️ Catalog - Bounded collection of books and ebooks
//
// Owns every Entry it holds. Lookups use a case-insensitive (title, author)
// key and return the first match in storage order.
//
// Deletion is O(1) swap-removal: the last entry moves into the freed slot,
// so the relative order of the remaining entries is NOT preserved. This is
// an intentional trade-off, callers must not rely on order after a delete.

use crate::entry::Entry;
use crate::error::{CatalogError, CatalogResult};
use std::str::FromStr;

// ============================================================================
// UPDATE SELECTORS
// ============================================================================

/// Which field `Catalog::update` should change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Title,
    Author,
    Price,
}

impl UpdateField {
    pub fn name(&self) -> &'static str {
        match self {
            UpdateField::Title => "title",
            UpdateField::Author => "author",
            UpdateField::Price => "price",
        }
    }
}

impl FromStr for UpdateField {
    type Err = CatalogError;

    /// Accepts field names (any case) or the driver's menu numbers 1-3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "1" => Ok(UpdateField::Title),
            "author" | "2" => Ok(UpdateField::Author),
            "price" | "3" => Ok(UpdateField::Price),
            _ => Err(CatalogError::InvalidField(s.to_string())),
        }
    }
}

/// A validated change to one entry field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Title(String),
    Author(String),
    Price(f64),
}

impl FieldUpdate {
    /// Build an update from a selector and the raw new value
    pub fn parse(field: UpdateField, raw: &str) -> CatalogResult<Self> {
        match field {
            UpdateField::Title => Ok(FieldUpdate::Title(raw.to_string())),
            UpdateField::Author => Ok(FieldUpdate::Author(raw.to_string())),
            UpdateField::Price => {
                let price: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| CatalogError::invalid_value("price", raw))?;
                Ok(FieldUpdate::Price(price))
            }
        }
    }

    pub fn field(&self) -> UpdateField {
        match self {
            FieldUpdate::Title(_) => UpdateField::Title,
            FieldUpdate::Author(_) => UpdateField::Author,
            FieldUpdate::Price(_) => UpdateField::Price,
        }
    }
}

/// Numeric fields must be finite and not below zero; `-0` is stored as `0`
fn non_negative(field: &'static str, value: f64) -> CatalogResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value + 0.0)
    } else {
        Err(CatalogError::invalid_value(field, value))
    }
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug)]
pub struct Catalog {
    /// Fixed at construction, always > 0
    capacity: usize,

    /// Storage order; insertion order until the first delete
    entries: Vec<Entry>,
}

impl Catalog {
    /// Create an empty catalog holding at most `capacity` entries
    pub fn new(capacity: usize) -> CatalogResult<Self> {
        if capacity == 0 {
            return Err(CatalogError::ZeroCapacity);
        }

        tracing::debug!(capacity, "catalog created");

        Ok(Catalog {
            capacity,
            entries: Vec::new(),
        })
    }

    /// Append a physical book
    pub fn add_physical(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> CatalogResult<()> {
        self.ensure_room()?;
        let price = non_negative("price", price)?;

        self.push(Entry::physical(title, author, price));
        Ok(())
    }

    /// Append an electronic book
    pub fn add_electronic(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        file_size_mb: f64,
    ) -> CatalogResult<()> {
        self.ensure_room()?;
        let price = non_negative("price", price)?;
        let file_size_mb = non_negative("file size", file_size_mb)?;

        self.push(Entry::electronic(title, author, price, file_size_mb));
        Ok(())
    }

    fn ensure_room(&self) -> CatalogResult<()> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, "add rejected, catalog full");
            return Err(CatalogError::CatalogFull {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn push(&mut self, entry: Entry) {
        tracing::debug!(
            id = entry.id(),
            kind = entry.kind().name(),
            title = entry.title(),
            "entry added"
        );
        self.entries.push(entry);
    }

    /// First entry matching (title, author), case-insensitively
    pub fn find(&self, title: &str, author: &str) -> Option<&Entry> {
        self.position(title, author).map(|index| &self.entries[index])
    }

    fn position(&self, title: &str, author: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.matches(title, author))
    }

    /// Update one field of the entry found by (title, author).
    ///
    /// Checks run in order: lookup (`NotFound`), selector (`InvalidField`),
    /// value (`InvalidValue`). Nothing changes unless all three pass.
    pub fn update(
        &mut self,
        title: &str,
        author: &str,
        field: &str,
        new_value: &str,
    ) -> CatalogResult<()> {
        if self.position(title, author).is_none() {
            return Err(CatalogError::not_found(title, author));
        }

        let field: UpdateField = field.parse()?;
        let change = FieldUpdate::parse(field, new_value)?;

        self.apply(title, author, change)
    }

    /// Apply an already-parsed update to the entry found by (title, author)
    pub fn apply(&mut self, title: &str, author: &str, change: FieldUpdate) -> CatalogResult<()> {
        let index = self
            .position(title, author)
            .ok_or_else(|| CatalogError::not_found(title, author))?;

        let change = match change {
            FieldUpdate::Price(price) => FieldUpdate::Price(non_negative("price", price)?),
            other => other,
        };

        let entry = &mut self.entries[index];
        tracing::debug!(id = entry.id(), field = change.field().name(), "entry updated");

        match change {
            FieldUpdate::Title(value) => entry.set_title(value),
            FieldUpdate::Author(value) => entry.set_author(value),
            FieldUpdate::Price(value) => entry.set_price(value),
        }

        Ok(())
    }

    /// Remove the entry found by (title, author) and hand it back.
    ///
    /// Swap-removal: the last entry takes the removed slot.
    pub fn delete(&mut self, title: &str, author: &str) -> CatalogResult<Entry> {
        let index = self
            .position(title, author)
            .ok_or_else(|| CatalogError::not_found(title, author))?;

        let removed = self.entries.swap_remove(index);
        tracing::debug!(id = removed.id(), remaining = self.entries.len(), "entry deleted");

        Ok(removed)
    }

    /// Entries in current storage order
    pub fn list_all(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Drop for Catalog {
    fn drop(&mut self) {
        tracing::debug!(released = self.entries.len(), "catalog released");
    }
}

// ============================================================================
// TESTS
// ============================================================================
