use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::filter::FilterState;
use crate::domain::types::{CategorySlug, SortKey};

/// Query string accepted by the catalog listing (`?q=&category=&sort=`).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CatalogQueryForm {
    #[validate(length(max = 200))]
    pub q: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQueryPayload {
    pub filter: FilterState,
}

#[derive(Debug, Error)]
pub enum CatalogQueryFormError {
    #[error("Catalog query validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for CatalogQueryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl CatalogQueryForm {
    /// Validates the raw query and resolves it into a [`FilterState`].
    ///
    /// A missing `sort` falls back to `default_sort`. An unrecognised one
    /// leaves the listing in filter order. A blank `category` means no
    /// category filter.
    pub fn into_payload(
        self,
        default_sort: SortKey,
    ) -> Result<CatalogQueryPayload, CatalogQueryFormError> {
        self.validate()?;

        let selected_sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => Some(default_sort),
            Some(raw) => match SortKey::try_from(raw) {
                Ok(sort) => Some(sort),
                Err(e) => {
                    log::warn!("Ignoring sort parameter: {e}");
                    None
                }
            },
        };

        Ok(CatalogQueryPayload {
            filter: FilterState {
                search_query: self.q.unwrap_or_default().trim().to_string(),
                selected_category: self.category.and_then(CategorySlug::parse_optional),
                selected_sort,
            },
        })
    }
}

impl TryFrom<CatalogQueryForm> for CatalogQueryPayload {
    type Error = CatalogQueryFormError;

    fn try_from(value: CatalogQueryForm) -> Result<Self, Self::Error> {
        value.into_payload(SortKey::default())
    }
}
