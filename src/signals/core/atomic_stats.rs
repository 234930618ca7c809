/*!
 * Lock-Free Trap Statistics
 * Atomic counters updated outside the handler table locks
 */

use crate::signals::core::types::TrapStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic trap statistics
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - Relaxed ordering; snapshots are monitoring data only
#[repr(C, align(64))]
pub struct AtomicTrapStats {
    traps_installed: AtomicU64,
    defaults_restored: AtomicU64,
    traps_rejected: AtomicU64,
    arm_unsupported: AtomicU64,
    system_defaults: AtomicU64,
}

impl AtomicTrapStats {
    #[inline]
    pub const fn new() -> Self {
        Self {
            traps_installed: AtomicU64::new(0),
            defaults_restored: AtomicU64::new(0),
            traps_rejected: AtomicU64::new(0),
            arm_unsupported: AtomicU64::new(0),
            system_defaults: AtomicU64::new(0),
        }
    }

    #[inline(always)]
    pub fn inc_installed(&self) {
        self.traps_installed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_restored(&self) {
        self.defaults_restored.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_rejected(&self) {
        self.traps_rejected.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_arm_unsupported(&self) {
        self.arm_unsupported.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_system_defaults(&self) {
        self.system_defaults.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats (no locks required)
    ///
    /// # Note
    /// Counters are read independently and may be mutually inconsistent
    /// under concurrent traps.
    #[inline]
    pub fn snapshot(&self) -> TrapStats {
        TrapStats {
            traps_installed: self.traps_installed.load(Ordering::Relaxed),
            defaults_restored: self.defaults_restored.load(Ordering::Relaxed),
            traps_rejected: self.traps_rejected.load(Ordering::Relaxed),
            arm_unsupported: self.arm_unsupported.load(Ordering::Relaxed),
            system_defaults: self.system_defaults.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicTrapStats {
    fn default() -> Self {
        Self::new()
    }
}
