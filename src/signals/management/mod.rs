/*!
 * Signal Management - Trap Operation
 * Central trap manager tying registry, handler table and arming together
 */

mod manager;

// Re-export public API
pub use manager::SignalTrap;
