//! First in, first out

use super::EvictionPolicy;
use crate::list::{Handle, OrderedList};

/// Evicts the oldest inserted entry
///
/// Lookups never reorder, so the back of the list is always the entry that
/// has been resident longest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl<K, V> EvictionPolicy<K, V> for Fifo {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn select_victim(&mut self, list: &OrderedList<K, V>) -> Option<Handle> {
        list.back()
    }
}
