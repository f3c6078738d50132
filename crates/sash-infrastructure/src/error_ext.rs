//! Error extension utilities
//!
//! Context extension methods for converting external errors into the
//! domain error type at the infrastructure boundary.

use std::fmt;

use sash_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use sash_infrastructure::error_ext::ErrorContext;
///
/// let config = figment.extract().config_context("failed to extract configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| {
            let message = format!("{context}: {err}");
            Error::Configuration {
                message,
                source: Some(Box::new(err)),
            }
        })
    }
}
