// ⚠️ Catalog Errors
// Every failure is local and recoverable; a failed operation leaves the catalog unchanged

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Add attempted while `len == capacity`
    #[error("catalog is full (capacity {capacity})")]
    CatalogFull { capacity: usize },

    /// No entry matched the (title, author) key
    #[error("no entry titled '{title}' by '{author}'")]
    NotFound { title: String, author: String },

    /// Update selector is not one of title / author / price
    #[error("invalid field selector '{0}'")]
    InvalidField(String),

    /// Numeric field would become negative, non-finite, or failed to parse
    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("catalog capacity must be greater than zero")]
    ZeroCapacity,
}

impl CatalogError {
    pub(crate) fn not_found(title: &str, author: &str) -> Self {
        CatalogError::NotFound {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub(crate) fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        CatalogError::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
