//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rpclite
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `get_instance` was called for a capability whose descriptors were never loaded
    #[error("Capability not loaded: {capability}")]
    CapabilityNotLoaded {
        /// Capability type name
        capability: String,
    },

    /// The loaded descriptor mapping has no entry for the requested key
    #[error("Capability {capability} has no implementation registered under key '{key}'")]
    UnknownKey {
        /// Capability type name
        capability: String,
        /// Requested key
        key: String,
    },

    /// An implementation could not be constructed
    #[error("Failed to instantiate {implementation}: {message}")]
    Instantiation {
        /// Implementation identifier
        implementation: String,
        /// Description of the failure
        message: String,
    },

    /// Discovery returned no live provider for a service key
    #[error("No provider available for service {service_key}")]
    ServiceUnavailable {
        /// The service key that was queried
        service_key: String,
    },

    /// The request never completed a round trip to the provider
    #[error("Transport error calling {address}: {message}")]
    Transport {
        /// Provider address
        address: String,
        /// Description of the transport failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider executed the call and reported a failure
    #[error("Remote execution failed: {message}")]
    RemoteExecution {
        /// Error description carried in the response envelope
        message: String,
    },

    /// Serialization or deserialization failure
    #[error("Codec error: {message}")]
    Codec {
        /// Description of the codec failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Service registry backend failure
    #[error("Registry error: {message}")]
    Registry {
        /// Description of the registry failure
        message: String,
    },

    /// Infrastructure failure outside the invocation pipeline
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

// Plugin resolution error creation methods
impl Error {
    /// Create a capability-not-loaded error
    pub fn capability_not_loaded<S: Into<String>>(capability: S) -> Self {
        Self::CapabilityNotLoaded {
            capability: capability.into(),
        }
    }

    /// Create an unknown-key error
    pub fn unknown_key<C: Into<String>, K: Into<String>>(capability: C, key: K) -> Self {
        Self::UnknownKey {
            capability: capability.into(),
            key: key.into(),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<I: Into<String>, S: Into<String>>(implementation: I, message: S) -> Self {
        Self::Instantiation {
            implementation: implementation.into(),
            message: message.into(),
        }
    }
}

// Invocation error creation methods
impl Error {
    /// Create a service-unavailable error
    pub fn service_unavailable<S: Into<String>>(service_key: S) -> Self {
        Self::ServiceUnavailable {
            service_key: service_key.into(),
        }
    }

    /// Create a transport error
    pub fn transport<A: Into<String>, S: Into<String>>(address: A, message: S) -> Self {
        Self::Transport {
            address: address.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error with source
    pub fn transport_with_source<
        A: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        address: A,
        message: S,
        source: E,
    ) -> Self {
        Self::Transport {
            address: address.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a remote execution error
    pub fn remote_execution<S: Into<String>>(message: S) -> Self {
        Self::RemoteExecution {
            message: message.into(),
        }
    }

    /// Create a registry error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }
}

// Codec and argument error creation methods
impl Error {
    /// Create a codec error
    pub fn codec<S: Into<String>>(message: S) -> Self {
        Self::Codec {
            message: message.into(),
            source: None,
        }
    }

    /// Create a codec error with source
    pub fn codec_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Codec {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
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
}
