/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use nonmax::NonMaxUsize;
use std::fmt;
use std::iter::FusedIterator;

/// A link record of an [`AdjacencyList`].
///
/// Links are positions in the arena of the owning list; [`NonMaxUsize`] is
/// used so that the `None` variant of `Option<NonMaxUsize>` needs no storage
/// for the variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    value: usize,
    prev: Option<NonMaxUsize>,
    next: Option<NonMaxUsize>,
}

/// The successors of a node, stored as a doubly-linked list.
///
/// Link records live in an arena owned by the list and refer to each other by
/// position, so no record is ever shared with another list. Since entries are
/// never removed, the arena contains exactly the entries of the list, but its
/// order is the order of allocation, not the order of the list: the list order
/// is given by the chain starting at the head.
///
/// Insertion at either end is O(1); iteration follows the forward links, and
/// [reverse iteration](Iter::rev) follows the back links.
///
/// # Examples
///
/// ```
/// use graph_visits::graphs::AdjacencyList;
///
/// let mut list = AdjacencyList::new();
/// list.insert_at_tail(2);
/// list.insert_at_tail(3);
/// list.insert_at_head(1);
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(list.to_string(), "null <-- 1 <--> 2 <--> 3 --> null");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    links: Vec<Link>,
    head: Option<NonMaxUsize>,
    tail: Option<NonMaxUsize>,
}

impl AdjacencyList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns whether the list is empty, that is, both head and tail are
    /// missing.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.tail.is_none()
    }

    /// Returns the first entry, if any.
    pub fn head(&self) -> Option<usize> {
        self.head.map(|pos| self.links[pos.get()].value)
    }

    /// Returns the last entry, if any.
    pub fn tail(&self) -> Option<usize> {
        self.tail.map(|pos| self.links[pos.get()].value)
    }

    fn alloc(&mut self, value: usize) -> NonMaxUsize {
        let pos = NonMaxUsize::new(self.links.len())
            .expect("arena position should never be usize::MAX");
        self.links.push(Link {
            value,
            prev: None,
            next: None,
        });
        pos
    }

    /// Inserts a new entry before the current head.
    ///
    /// If the list was empty, the new entry is also the tail.
    pub fn insert_at_head(&mut self, value: usize) {
        let pos = self.alloc(value);
        self.links[pos.get()].next = self.head;
        match self.head {
            Some(old_head) => self.links[old_head.get()].prev = Some(pos),
            None => self.tail = Some(pos),
        }
        self.head = Some(pos);
    }

    /// Inserts a new entry after the current tail.
    ///
    /// If the list was empty, this is the same as
    /// [`insert_at_head`](Self::insert_at_head).
    pub fn insert_at_tail(&mut self, value: usize) {
        let Some(old_tail) = self.tail else {
            self.insert_at_head(value);
            return;
        };
        let pos = self.alloc(value);
        self.links[pos.get()].prev = Some(old_tail);
        self.links[old_tail.get()].next = Some(pos);
        self.tail = Some(pos);
    }

    /// Returns an iterator over the entries, from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            links: &self.links,
            front: self.head,
            back: self.tail,
            remaining: self.links.len(),
        }
    }

    /// Checks the structural invariants of the list: the head has no
    /// predecessor, the tail has no successor, every forward link is matched
    /// by a back link, and following the forward links from the head reaches
    /// the tail in exactly [`len`](Self::len) steps.
    pub fn is_consistent(&self) -> bool {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return self.head.is_none() && self.tail.is_none() && self.links.is_empty();
        };
        if self.links[head.get()].prev.is_some() || self.links[tail.get()].next.is_some() {
            return false;
        }

        let mut steps = 1;
        let mut curr = head;
        while let Some(next) = self.links[curr.get()].next {
            if self.links[next.get()].prev != Some(curr) || steps == self.links.len() {
                return false;
            }
            steps += 1;
            curr = next;
        }
        curr == tail && steps == self.links.len()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<usize> for AdjacencyList {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for value in iter {
            self.insert_at_tail(value);
        }
    }
}

impl FromIterator<usize> for AdjacencyList {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl PartialEq for AdjacencyList {
    /// Two lists are equal if they contain the same entries in the same
    /// order, independently of the layout of their arenas.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for AdjacencyList {}

impl fmt::Display for AdjacencyList {
    /// Writes `null <-- a <--> b --> null`; an empty list writes nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str("null <-- ")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <--> ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(" --> null")
    }
}

/// The iterator returned by [`AdjacencyList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    links: &'a [Link],
    front: Option<NonMaxUsize>,
    back: Option<NonMaxUsize>,
    /// Entries not yet returned from either end; when it reaches zero the
    /// two cursors have met.
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let link = &self.links[self.front?.get()];
        self.front = link.next;
        self.remaining -= 1;
        Some(link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let link = &self.links[self.back?.get()];
        self.back = link.prev;
        self.remaining -= 1;
        Some(link.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        let list = AdjacencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.iter().next(), None);
        assert!(list.is_consistent());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_insert_at_head() {
        let mut list = AdjacencyList::new();
        list.insert_at_head(1);
        assert_eq!(list.head(), Some(1));
        assert_eq!(list.tail(), Some(1));
        list.insert_at_head(2);
        list.insert_at_head(3);
        assert_eq!(list.head(), Some(3));
        assert_eq!(list.tail(), Some(1));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert!(list.is_consistent());
    }

    #[test]
    fn test_insert_at_tail() {
        let mut list = AdjacencyList::new();
        for value in [4, 0, 4, 7] {
            list.insert_at_tail(value);
        }
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![4, 0, 4, 7]);
        assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![7, 4, 0, 4]);
        assert!(list.is_consistent());
    }

    #[test]
    fn test_mixed_insertions() {
        let mut list = AdjacencyList::new();
        list.insert_at_tail(2);
        list.insert_at_head(1);
        list.insert_at_tail(3);
        list.insert_at_head(0);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(list.is_consistent());

        // Both ends meet in the middle
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_eq_ignores_layout() {
        let mut by_head = AdjacencyList::new();
        by_head.insert_at_head(2);
        by_head.insert_at_head(1);
        let by_tail: AdjacencyList = [1, 2].into_iter().collect();
        assert_eq!(by_head, by_tail);
    }

    #[test]
    fn test_display() {
        let list: AdjacencyList = [5].into_iter().collect();
        assert_eq!(list.to_string(), "null <-- 5 --> null");
        let list: AdjacencyList = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "null <-- 1 <--> 2 <--> 3 --> null");
    }
}
