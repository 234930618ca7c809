/*!
 * Signal Registry - Names and Numbers
 * Platform signal table input and the bidirectional name registry
 */

mod names;
mod table;

// Re-export public API
pub use names::SignalRegistry;
pub use table::PlatformSignalTable;
