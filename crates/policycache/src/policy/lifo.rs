//! Last in, first out

use super::EvictionPolicy;
use crate::list::{Handle, OrderedList};

/// Evicts the most recently inserted entry
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

impl<K, V> EvictionPolicy<K, V> for Lifo {
    fn name(&self) -> &'static str {
        "lifo"
    }

    fn select_victim(&mut self, list: &OrderedList<K, V>) -> Option<Handle> {
        list.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::CacheEntry;

    #[test]
    fn test_lifo_picks_newest() {
        let mut list = OrderedList::new();
        let first = list.push_front(CacheEntry::new(1, "a"));
        let newest = list.push_front(CacheEntry::new(2, "b"));

        let mut policy = Lifo;
        assert_eq!(policy.select_victim(&list), Some(newest));

        // Lookups do not change which entry is newest
        policy.on_access(&mut list, first);
        assert_eq!(policy.select_victim(&list), Some(newest));
    }
}
