//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Response sentinels
// =============================================================================

/// Body returned by mutations that succeed without a richer payload
pub const RESPONSE_OK: &str = "OK";

/// Body returned by every failed operation
pub const RESPONSE_FAILURE: &str = "FALHA";

/// Greeting served at the root path
pub const WELCOME_MESSAGE: &str = "Seja bem vindo";

/// Response header carrying the differentiated error kind
pub const ERROR_CODE_HEADER: &str = "x-error-code";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Separator between the local part and the domain of an email
pub const EMAIL_SEPARATOR: char = '@';

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
