//! Ordered list shared by the cache store and its eviction policies
//!
//! Arena-backed doubly-linked list: nodes live in a `Vec` slot table and are
//! linked by index, so handles stay valid while other nodes come and go.
//! Front is the most recently pushed (or promoted) entry, back the oldest.

/// Opaque reference to a node in an [`OrderedList`]
///
/// A handle is only meaningful for the list that produced it and only while
/// its entry is resident. Once the entry is removed, the slot may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

/// Key/value payload held by one node of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Create a new entry
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The entry's key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The entry's value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Split the entry into its key and value
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

struct Node<K, V> {
    entry: CacheEntry<K, V>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked sequence of cache entries with O(1) reordering
pub struct OrderedList<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<K, V> Default for OrderedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedList<K, V> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert an entry at the front and return its handle
    pub fn push_front(&mut self, entry: CacheEntry<K, V>) -> Handle {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            entry,
            prev: None,
            next: None,
        });
        self.link_front(idx);
        self.len += 1;
        Handle(idx)
    }

    /// Remove the node behind `handle`
    ///
    /// Returns `None` if the handle does not refer to a resident node.
    pub fn remove(&mut self, handle: Handle) -> Option<CacheEntry<K, V>> {
        let idx = handle.0;
        if !self.is_resident(idx) {
            return None;
        }

        self.unlink(idx);
        self.len -= 1;
        self.free_list.push(idx);
        self.nodes[idx].take().map(|node| node.entry)
    }

    /// Handle of the front (newest) node
    pub fn front(&self) -> Option<Handle> {
        self.head.map(Handle)
    }

    /// Handle of the back (oldest) node
    pub fn back(&self) -> Option<Handle> {
        self.tail.map(Handle)
    }

    /// Remove and return the front entry
    pub fn pop_front(&mut self) -> Option<CacheEntry<K, V>> {
        self.front().and_then(|handle| self.remove(handle))
    }

    /// Remove and return the back entry
    pub fn pop_back(&mut self) -> Option<CacheEntry<K, V>> {
        self.back().and_then(|handle| self.remove(handle))
    }

    /// Move a node to the front; no-op if it is already there
    pub fn move_to_front(&mut self, handle: Handle) {
        let idx = handle.0;
        if self.head == Some(idx) || !self.is_resident(idx) {
            return;
        }

        self.unlink(idx);
        self.link_front(idx);
    }

    /// Entry behind `handle`, if resident
    pub fn get(&self, handle: Handle) -> Option<&CacheEntry<K, V>> {
        self.nodes
            .get(handle.0)
            .and_then(Option::as_ref)
            .map(|node| &node.entry)
    }

    /// Mutable entry behind `handle`, if resident
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut CacheEntry<K, V>> {
        self.nodes
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .map(|node| &mut node.entry)
    }

    /// Handles from front to back
    pub fn handles(&self) -> Handles<'_, K, V> {
        Handles {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Entries from front to back
    pub fn iter(&self) -> impl Iterator<Item = &CacheEntry<K, V>> + '_ {
        self.handles().filter_map(move |handle| self.get(handle))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn is_resident(&self, idx: usize) -> bool {
        matches!(self.nodes.get(idx), Some(Some(_)))
    }

    fn link_front(&mut self, idx: usize) {
        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

/// Iterator over list handles from front to back
pub struct Handles<'a, K, V> {
    list: &'a OrderedList<K, V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<K, V> Iterator for Handles<'_, K, V> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let idx = self.cursor?;
        self.cursor = self.list.nodes[idx].as_ref().and_then(|node| node.next);
        self.remaining = self.remaining.saturating_sub(1);
        Some(Handle(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Handles<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &OrderedList<i32, &str>) -> Vec<i32> {
        list.iter().map(|entry| *entry.key()).collect()
    }

    #[test]
    fn test_push_front_order() {
        let mut list = OrderedList::new();

        list.push_front(CacheEntry::new(1, "a"));
        list.push_front(CacheEntry::new(2, "b"));
        list.push_front(CacheEntry::new(3, "c"));

        assert_eq!(keys(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(list.front().unwrap()).unwrap().key(), &3);
        assert_eq!(list.get(list.back().unwrap()).unwrap().key(), &1);
    }

    #[test]
    fn test_empty_list() {
        let mut list: OrderedList<i32, &str> = OrderedList::new();

        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.pop_front().is_none());
        assert!(list.pop_back().is_none());
        assert_eq!(list.handles().count(), 0);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = OrderedList::new();

        list.push_front(CacheEntry::new(1, "a"));
        let mid = list.push_front(CacheEntry::new(2, "b"));
        list.push_front(CacheEntry::new(3, "c"));

        let removed = list.remove(mid).unwrap();
        assert_eq!(removed.into_parts(), (2, "b"));
        assert_eq!(keys(&list), vec![3, 1]);

        // Second removal of the same handle is rejected
        assert!(list.remove(mid).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_ends() {
        let mut list = OrderedList::new();

        let first = list.push_front(CacheEntry::new(1, "a"));
        list.push_front(CacheEntry::new(2, "b"));
        let last = list.push_front(CacheEntry::new(3, "c"));

        list.remove(first);
        assert_eq!(list.get(list.back().unwrap()).unwrap().key(), &2);

        list.remove(last);
        assert_eq!(list.front(), list.back());
        assert_eq!(keys(&list), vec![2]);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = OrderedList::new();

        let a = list.push_front(CacheEntry::new(1, "a"));
        list.push_front(CacheEntry::new(2, "b"));
        let c = list.push_front(CacheEntry::new(3, "c"));

        list.move_to_front(a);
        assert_eq!(keys(&list), vec![1, 3, 2]);

        // Already at front
        list.move_to_front(a);
        assert_eq!(keys(&list), vec![1, 3, 2]);

        list.move_to_front(c);
        assert_eq!(keys(&list), vec![3, 1, 2]);
        assert_eq!(list.get(list.back().unwrap()).unwrap().key(), &2);
    }

    #[test]
    fn test_pop_front_and_back() {
        let mut list = OrderedList::new();

        list.push_front(CacheEntry::new(1, "a"));
        list.push_front(CacheEntry::new(2, "b"));
        list.push_front(CacheEntry::new(3, "c"));

        assert_eq!(list.pop_back().unwrap().key(), &1);
        assert_eq!(list.pop_front().unwrap().key(), &3);
        assert_eq!(keys(&list), vec![2]);
    }

    #[test]
    fn test_slot_reuse() {
        let mut list = OrderedList::new();

        let a = list.push_front(CacheEntry::new(1, "a"));
        list.push_front(CacheEntry::new(2, "b"));
        list.remove(a);

        let c = list.push_front(CacheEntry::new(3, "c"));
        assert_eq!(c, a, "freed slot should be reused");
        assert_eq!(keys(&list), vec![3, 2]);
        assert_eq!(list.handles().len(), 2);
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut list = OrderedList::new();

        let a = list.push_front(CacheEntry::new(1, "a"));
        *list.get_mut(a).unwrap().value_mut() = "z";
        assert_eq!(list.get(a).unwrap().value(), &"z");

        list.clear();
        assert!(list.is_empty());
        assert!(list.get(a).is_none());
    }
}
