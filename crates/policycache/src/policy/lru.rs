//! Least recently used

use super::EvictionPolicy;
use crate::list::{Handle, OrderedList};

/// Evicts the entry that has gone longest without an insert or lookup
///
/// Every hit promotes its node to the front, leaving the least recently
/// used entry at the back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lru;

impl<K, V> EvictionPolicy<K, V> for Lru {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn select_victim(&mut self, list: &OrderedList<K, V>) -> Option<Handle> {
        list.back()
    }

    fn on_access(&mut self, list: &mut OrderedList<K, V>, handle: Handle) {
        list.move_to_front(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::CacheEntry;

    #[test]
    fn test_lru_access_promotes() {
        let mut list = OrderedList::new();
        let a = list.push_front(CacheEntry::new(1, "a"));
        let b = list.push_front(CacheEntry::new(2, "b"));
        list.push_front(CacheEntry::new(3, "c"));

        let mut policy = Lru;
        assert_eq!(policy.select_victim(&list), Some(a));

        policy.on_access(&mut list, a);
        assert_eq!(list.front(), Some(a));
        assert_eq!(policy.select_victim(&list), Some(b));
    }

    #[test]
    fn test_lru_repeated_access() {
        let mut list = OrderedList::new();
        let a = list.push_front(CacheEntry::new(1, "a"));
        let b = list.push_front(CacheEntry::new(2, "b"));

        let mut policy = Lru;
        for _ in 0..3 {
            policy.on_access(&mut list, b);
        }
        assert_eq!(list.len(), 2);
        assert_eq!(policy.select_victim(&list), Some(a));
    }
}
