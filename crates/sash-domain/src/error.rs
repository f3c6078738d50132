//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sash administration shell
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// A service id was looked up in the container but never registered
    #[error("service '{id}' is not registered")]
    ServiceNotFound {
        /// The missing service id
        id: String,
    },

    /// Service resolution re-entered a service that is still being built
    #[error("circular service resolution: {chain}")]
    CircularDependency {
        /// The resolution chain, outermost service first
        chain: String,
    },

    /// A deferred method call was replayed against a service that does not accept it
    #[error("deferred call '{method}' is not supported by the target service")]
    UnsupportedMethodCall {
        /// The rejected method name
        method: String,
    },

    /// A service resolved to a different concrete type than the caller requested
    #[error("service '{id}' is not of the requested type")]
    TypeMismatch {
        /// The service id that failed the downcast
        id: String,
    },

    /// No registered command matches the requested name
    #[error("unknown command '{name}'")]
    CommandNotFound {
        /// The requested command name
        name: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Container error creation methods
impl Error {
    /// Create a service-not-found error
    pub fn service_not_found<S: Into<String>>(id: S) -> Self {
        Self::ServiceNotFound { id: id.into() }
    }

    /// Create a circular dependency error from a resolution chain
    pub fn circular_dependency<S: Into<String>>(chain: S) -> Self {
        Self::CircularDependency {
            chain: chain.into(),
        }
    }

    /// Create an unsupported deferred-call error
    pub fn unsupported_method<S: Into<String>>(method: S) -> Self {
        Self::UnsupportedMethodCall {
            method: method.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(id: S) -> Self {
        Self::TypeMismatch { id: id.into() }
    }
}

// Shell error creation methods
impl Error {
    /// Create a command-not-found error
    pub fn command_not_found<S: Into<String>>(name: S) -> Self {
        Self::CommandNotFound { name: name.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
