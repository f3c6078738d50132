//! # sash
//!
//! Command-line administration shell for the Lattice content-management
//! platform.
//!
//! The shell boots the platform's service container, lets a compiler pass
//! discover every service tagged as a console command while the container
//! is still compiling, and dispatches the invoked command from the
//! registry the pass populated.
//!
//! ## Example
//!
//! ```ignore
//! // Run a command the way the binary does
//! let output = sash::run(None, &["status".to_string()]).await?;
//! println!("{output}");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects, the console-command port
//! - `container` - service definitions, compiler passes, the command registry
//! - `commands` - built-in administration commands
//! - `infrastructure` - configuration, logging, container boot

/// Domain layer - errors, value objects, command port
pub mod domain {
    pub use sash_domain::*;
}

/// Container layer - definitions, passes, registry
pub mod container {
    pub use sash_container::*;
}

/// Built-in administration commands
pub mod commands {
    pub use sash_commands::*;
}

/// Infrastructure layer - configuration, logging, boot
pub mod infrastructure {
    pub use sash_infrastructure::*;
}

mod runner;

pub use runner::run;
