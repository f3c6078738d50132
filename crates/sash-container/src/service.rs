//! Runtime service trait
//!
//! Everything the container instantiates is stored as `Arc<dyn Service>`.
//! The trait carries two pieces of plumbing: downcasting back to the
//! concrete type (`downcast-rs`), and the replay hook for deferred method
//! calls recorded on the service's definition during compilation.

use std::fmt;

use downcast_rs::{impl_downcast, DowncastSync};

use sash_domain::error::{Error, Result};

use crate::container::LazyService;

/// A service instance held by the running container
pub trait Service: DowncastSync {
    /// Replay hook for deferred method calls recorded on this service's
    /// definition.
    ///
    /// The container invokes this once per recorded call, in recording
    /// order, immediately after the service is constructed. Services that
    /// accept setter-style registration (the command registry) override it;
    /// the default rejects every method.
    fn apply_deferred_call(&self, method: &str, argument: LazyService) -> Result<()> {
        let _ = argument;
        Err(Error::unsupported_method(method))
    }
}

impl_downcast!(sync Service);

impl fmt::Debug for dyn Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Service")
    }
}
