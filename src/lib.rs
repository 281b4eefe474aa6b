// Library Catalog - Core Library
// Exposes the catalog core plus the console session built on top of it

pub mod entry;
pub mod catalog;
pub mod compare;
pub mod error;
pub mod auth;
pub mod config;
pub mod session;

// Re-export commonly used types
pub use entry::{Entry, EntryKind};
pub use catalog::{Catalog, FieldUpdate, UpdateField};
pub use compare::{compare_price, PriceComparison};
pub use error::{CatalogError, CatalogResult};
pub use auth::{hash_password, Credentials};
pub use config::SessionConfig;
pub use session::{describe_error, MenuChoice, Session, SessionOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
