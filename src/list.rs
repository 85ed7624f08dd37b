//! Doubly linked list with positional access.
//!
//! Nodes live in a slot vector owned by the list and point at their neighbours through
//! [`NodeKey`] handles instead of pointers. Removed slots are chained into a free list and reused
//! by later insertions, so a long-lived list does not keep growing its storage.
//!
//! Positional access resolves an index by walking from whichever anchor is closer: from the head
//! when `index < len / 2`, from the tail otherwise. Reaching an element therefore costs
//! *O*(min(`index`, `len - index`)), which is what every algorithm built on top of `get`, `set` and
//! `swap` has to budget for.
//!
//! ```ignore
//! let mut list: IndexableList<i32> = [3, 1, 2].into_iter().collect();
//! list.push_front(0);
//! list.swap(1, 3)?;
//! assert_eq!(list.get(1)?, &2);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 1, 2, 0]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::error::ListError;

/// Stable handle to a node of an [`IndexableList`].
///
/// A key stays valid until its node is removed. After that the slot may be handed to a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly linked list addressable by position.
#[derive(Clone)]
pub struct IndexableList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    len: usize,
}

impl<T> IndexableList<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the slot vector reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn push_front(&mut self, value: T) {
        let key = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let key = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    /// Removes the first element. Returns `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Removes the last element. Returns `None` on an empty list.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Inserts `value` so that it ends up at `index`. `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        let Some(next) = self.node_at(index) else {
            self.push_back(value);
            return Ok(());
        };

        let prev = self.node(next).prev;
        let key = self.alloc(Node {
            value,
            prev,
            next: Some(next),
        });
        self.node_mut(next).prev = Some(key);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(key),
            None => self.head = Some(key),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let key = self.checked_node_at(index)?;
        Ok(self.unlink(key))
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let key = self.checked_node_at(index)?;
        Ok(&self.node(key).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let key = self.checked_node_at(index)?;
        Ok(&mut self.node_mut(key).value)
    }

    /// Overwrites the element at `index` and returns the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Exchanges the values at `a` and `b`. The nodes themselves stay where they are.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ListError> {
        let first = self.checked_node_at(a)?;
        let second = self.checked_node_at(b)?;
        if first == second {
            return Ok(());
        }

        let (lo, hi) = if first.0 < second.0 {
            (first.0, second.0)
        } else {
            (second.0, first.0)
        };
        let (low_slots, high_slots) = self.slots.split_at_mut(hi);
        match (&mut low_slots[lo], &mut high_slots[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.value, &mut y.value),
            _ => unreachable!("linked node resolved to a vacant slot"),
        }
        Ok(())
    }

    pub fn front(&self) -> Result<&T, ListError> {
        let head = self.head.ok_or(ListError::Empty)?;
        Ok(&self.node(head).value)
    }

    pub fn back(&self) -> Result<&T, ListError> {
        let tail = self.tail.ok_or(ListError::Empty)?;
        Ok(&self.node(tail).value)
    }

    /// Resolves `index` to its node, walking from the head or the tail, whichever is closer.
    pub fn node_at(&self, index: usize) -> Option<NodeKey> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut key = self.head?;
            for _ in 0..index {
                key = self.node(key).next?;
            }
            Some(key)
        } else {
            let mut key = self.tail?;
            for _ in index + 1..self.len {
                key = self.node(key).prev?;
            }
            Some(key)
        }
    }

    /// Reads the node behind `key`, or `None` if the slot is vacant.
    pub fn value(&self, key: NodeKey) -> Option<&T> {
        match self.slots.get(key.0)? {
            Slot::Occupied(node) => Some(&node.value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Front-to-back iterator. Use `.rev()` to walk from the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn checked_node_at(&self, index: usize) -> Result<NodeKey, ListError> {
        self.node_at(index).ok_or_else(|| self.out_of_range(index))
    }

    #[inline]
    fn out_of_range(&self, index: usize) -> ListError {
        ListError::OutOfRange {
            index,
            len: self.len,
        }
    }

    fn node(&self, key: NodeKey) -> &Node<T> {
        match &self.slots[key.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node key {:?}", key),
        }
    }

    fn node_mut(&mut self, key: NodeKey) -> &mut Node<T> {
        match &mut self.slots[key.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node key {:?}", key),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> NodeKey {
        match self.free {
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                NodeKey(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeKey(self.slots.len() - 1)
            }
        }
    }

    /// Detaches the node behind `key` from its neighbours and frees its slot.
    fn unlink(&mut self, key: NodeKey) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let node = match mem::replace(&mut self.slots[key.0], vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node key {:?}", key),
        };
        self.free = Some(key.0);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;

        if self.len == 0 {
            self.slots.clear();
            self.free = None;
        }

        node.value
    }
}

impl<T> Default for IndexableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for IndexableList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for IndexableList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for IndexableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for IndexableList<T> {}

impl<T> FromIterator<T> for IndexableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for IndexableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexableList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for IndexableList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over an [`IndexableList`].
pub struct Iter<'a, T> {
    list: &'a IndexableList<T>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`IndexableList`].
pub struct IntoIter<T> {
    list: IndexableList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
