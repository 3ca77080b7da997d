use serde::Deserialize;

use crate::domain::types::SortKey;

/// Configuration options for the catalog front-end.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogConfig {
    /// Path or URL of the SQLite database holding the catalog snapshot.
    pub database_url: String,
    /// Ordering used when a request does not name one.
    #[serde(default)]
    pub default_sort: SortKey,
}
