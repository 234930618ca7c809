/*!
 * Handler Table
 * Process-wide map from signal number to installed handler entry
 */

use crate::core::types::{HandlerId, SignalNumber};
use crate::signals::core::types::HandlerEntry;
use parking_lot::{Mutex, MutexGuard, RwLock};

/// One signal number's slot
///
/// `entry` is the committed state seen by readers. `install` serializes
/// whole trap operations (swap plus arming) for this number only, so the
/// arming order matches the swap order while readers never wait on arming.
#[derive(Debug, Default)]
pub struct HandlerSlot {
    install: Mutex<()>,
    entry: RwLock<Option<HandlerEntry>>,
}

impl HandlerSlot {
    /// Replace the entry, returning what was there (`None` if nothing was)
    #[inline]
    pub fn swap(&self, new_entry: Option<HandlerEntry>) -> Option<HandlerEntry> {
        std::mem::replace(&mut *self.entry.write(), new_entry)
    }

    #[inline]
    pub fn get(&self) -> Option<HandlerEntry> {
        *self.entry.read()
    }

    /// Serialize an install sequence for this number
    #[inline]
    pub fn lock_install(&self) -> MutexGuard<'_, ()> {
        self.install.lock()
    }
}

/// Handler table with one independently locked slot per signal number
///
/// # Performance
/// - Per-number locking: installs on different numbers never contend
/// - Reads take a shared lock on a single slot
#[derive(Debug)]
pub struct HandlerTable {
    slots: Box<[HandlerSlot]>,
}

impl HandlerTable {
    /// Create an empty table covering numbers `0..capacity`
    pub fn new(capacity: usize) -> Self {
        let slots: Vec<HandlerSlot> = (0..capacity).map(|_| HandlerSlot::default()).collect();
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Slot for a number; `None` when outside the table
    #[inline]
    pub fn slot(&self, number: SignalNumber) -> Option<&HandlerSlot> {
        usize::try_from(number)
            .ok()
            .and_then(|index| self.slots.get(index))
    }

    /// Replace the entry for `number`
    ///
    /// Returns `None` both when nothing was installed and when `number` is
    /// outside the table; in the latter case nothing is stored.
    pub fn swap(&self, number: SignalNumber, new_entry: Option<HandlerEntry>) -> Option<HandlerEntry> {
        self.slot(number).and_then(|slot| slot.swap(new_entry))
    }

    pub fn get(&self, number: SignalNumber) -> Option<HandlerEntry> {
        self.slot(number).and_then(HandlerSlot::get)
    }

    /// Snapshot of all installed entries in number order
    pub fn installed(&self) -> Vec<(SignalNumber, HandlerEntry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.get().map(|entry| (index as SignalNumber, entry)))
            .collect()
    }

    /// Number of installed entries
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First number whose entry is the callback `id`
    pub fn find_callback(&self, id: HandlerId) -> Option<SignalNumber> {
        self.slots
            .iter()
            .position(|slot| slot.get() == Some(HandlerEntry::Callback(id)))
            .map(|index| index as SignalNumber)
    }
}
