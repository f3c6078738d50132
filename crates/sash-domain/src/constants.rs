//! Domain constants
//!
//! Contains the identifiers the shell and the platform agree on.
//! Infrastructure-specific constants are defined in
//! `sash_infrastructure::constants`.

// ============================================================================
// PLATFORM CONSTANTS
// ============================================================================

/// Human-readable name of the content-management platform the shell administers
pub const PLATFORM_NAME: &str = "Lattice";

// ============================================================================
// COMMAND DISCOVERY CONSTANTS
// ============================================================================

/// Default service id under which the command registry is registered
pub const COMMAND_REGISTRY_ID: &str = "command.registry";

/// Default tag carried by service definitions that provide a console command
pub const COMMAND_TAG: &str = "console.command";

/// Method name recorded on the registry definition for each discovered command
pub const ADD_COMMAND_REFERENCE: &str = "add_command_reference";

// ============================================================================
// BUILT-IN COMMAND SERVICE IDS
// ============================================================================

/// Service id of the command-listing command
pub const LIST_COMMAND_ID: &str = "command.list";

/// Service id of the platform status command
pub const STATUS_COMMAND_ID: &str = "command.status";

/// Service id of the version command
pub const VERSION_COMMAND_ID: &str = "command.version";
