//! Error conversion glue between the domain and the shared error types.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here, behind the `data` feature.

use pushkind_common::repository::errors::RepositoryError;
use pushkind_common::services::errors::ServiceError;

use crate::domain::types::TypeConstraintError;
use crate::forms::catalog::CatalogQueryFormError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<CatalogQueryFormError> for ServiceError {
    fn from(val: CatalogQueryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
