/*!
 * Signal Limits and Constants
 *
 * Centralized location for the fixed names, numbers and policy tables
 * used when building the registry and applying trap policy.
 */

use super::types::SignalNumber;

// =============================================================================
// VIRTUAL SIGNALS
// =============================================================================

/// Number of the virtual `EXIT` pseudo-signal
/// Never armed at the OS level
pub const EXIT_SIGNAL: SignalNumber = 0;

/// Name of the virtual `EXIT` pseudo-signal
pub const EXIT_SIGNAL_NAME: &str = "EXIT";

/// Upper bound accepted for a platform's signal count
/// Larger tables are rejected rather than allocated
pub const MAX_NSIG: SignalNumber = 1024;

/// Status passed to the termination facility by the built-in exit callback
pub const EXIT_CALLBACK_STATUS: i32 = 0;

// =============================================================================
// NAMING
// =============================================================================

/// Optional prefix accepted on signal names (`SIGINT` == `INT`)
pub const SIGNAL_PREFIX: &str = "SIG";

/// Signal used internally to interrupt blocking native calls
/// [SECURITY] Never user-trappable
pub const RESERVED_SIGNAL: &str = "VTALRM";

/// Alias names synthesized from their counterpart when the platform omits them
/// Pairs are `(alias, counterpart)`
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[("CLD", "CHLD")];

/// Names that win the `number -> name` table over any alias sharing their number
/// [LINUX-COMPAT] CHLD over CLD, ABRT over IOT
pub const PREFERRED_NAMES: &[&str] = &["CHLD", "ABRT"];

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Path to a JSON platform signal table (host table when unset)
pub const TABLE_PATH_ENV: &str = "SIGTRAP_TABLE";

/// Overrides the reserved signal name
pub const RESERVED_SIGNAL_ENV: &str = "SIGTRAP_RESERVED_SIGNAL";

/// Enables JSON trace output when set to `1` or `true`
pub const TRACE_JSON_ENV: &str = "SIGTRAP_TRACE_JSON";
