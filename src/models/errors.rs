use thiserror::Error;

/// Service-level errors raised by checkout business rules
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Cannot remove an item that is not in cart: {name}")]
    NotFound { name: String },
}

/// Cart-level errors for order line operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Cannot remove an item that is not in cart: {name}")]
    NotFound { name: String },

    #[error("Quantity of {name} is already at its maximum")]
    QuantityLimit { name: String },
}

impl From<CartError> for ServiceError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::NotFound { name } => ServiceError::NotFound { name },
            err @ CartError::QuantityLimit { .. } => ServiceError::invalid_argument(err.to_string()),
        }
    }
}

impl ServiceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ServiceError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ServiceError::InvalidArgument { .. })
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
