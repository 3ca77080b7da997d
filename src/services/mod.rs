pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod catalog;
pub mod categories;
