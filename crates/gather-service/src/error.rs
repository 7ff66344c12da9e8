use gather_core::error::CoreError;
use gather_db::error::DbError;
use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

impl ServiceError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CoreError(CoreError::NotFound(_))
                | Self::DatabaseError(DbError::CoreError(CoreError::NotFound(_)))
        )
    }

    #[must_use]
    pub const fn is_invalid_date_range(&self) -> bool {
        matches!(
            self,
            Self::CoreError(CoreError::InvalidDateRange { .. })
                | Self::DatabaseError(DbError::CoreError(CoreError::InvalidDateRange { .. }))
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
