//! Core library exports for the deals catalog.
//!
//! The `domain` module is always available and holds the pure catalog logic:
//! category hierarchy indexing and the product filter/sort engine. The `data`
//! feature adds persistence, forms and the service layer on top of it.

pub mod domain;

#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
