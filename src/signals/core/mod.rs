/*!
 * Signal Core - Types and Traits
 * Fundamental types, configuration and trait definitions for signal trapping
 */

pub mod atomic_stats;
pub mod config;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use atomic_stats::AtomicTrapStats;
pub use config::{RegistryConfig, TrapConfig};
pub use traits::*;
pub use types::*;
