//! Domain layer for the sash administration shell.
//!
//! Holds the pieces every other layer agrees on: the error taxonomy, the
//! shared value objects, the console-command port, and the wire-level
//! constants (service ids, tag names, the deferred registration method).
//! Nothing in this crate touches the container, configuration, or I/O.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::console::{CommandContext, ConsoleCommand};
pub use value_objects::ServiceId;
