use std::io;

use crate::{list::Link, present::Tabular};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    value: T,
    next: Link,
}

/// An append-only singly-linked list.
///
/// Insertion walks from the head to find the tail, so building a list of `n`
/// records is quadratic. The lists built here are small enough that this does
/// not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglyLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Link,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Appends `value` at the tail.
    pub fn insert(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node { value, next: None });

        let Some(mut current) = self.head else {
            self.head = Some(index);
            return;
        };
        while let Some(next) = self.nodes[current].next {
            current = next;
        }
        self.nodes[current].next = Some(index);
    }

    /// The first record, if any.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.map(|index| &self.nodes[index].value)
    }

    /// Iterates from head to the terminal node.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
        }
    }

    /// Number of nodes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the list has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops every node at once, returning the list to its empty state.
    pub fn release(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}

impl<T: Tabular> SinglyLinkedList<T> {
    /// Writes the list as a table, or the "not found" message when empty.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn display(&self, out: &mut impl io::Write) -> io::Result<()> {
        let Some(head) = self.head() else {
            return writeln!(out, "{}", T::NOT_FOUND);
        };
        crate::present::write_table(out, &head.title(), self.iter())
    }
}

/// Forward iterator over a [`SinglyLinkedList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: Link,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];
        self.current = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CollectionPoint;

    fn point(id: i32, category: &str, address: &str) -> CollectionPoint {
        CollectionPoint {
            id,
            category: category.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn insert_preserves_order() {
        let list: SinglyLinkedList<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.head(), Some(&3));
    }

    #[test]
    fn last_node_is_terminal() {
        let mut list = SinglyLinkedList::new();
        list.insert("a");
        list.insert("b");
        assert_eq!(list.nodes[0].next, Some(1));
        assert_eq!(list.nodes[1].next, None);
    }

    #[test]
    fn new_list_is_empty() {
        let list = SinglyLinkedList::<i32>::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn display_empty_reports_not_found() {
        let list = SinglyLinkedList::<CollectionPoint>::new();
        let mut out = Vec::new();
        list.display(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", CollectionPoint::NOT_FOUND)
        );
    }

    #[test]
    fn display_prints_title_from_head_and_every_row() {
        let list: SinglyLinkedList<_> = [point(1, "Plastico", "Rua A"), point(3, "Plastico", "Rua C")]
            .into_iter()
            .collect();
        let mut out = Vec::new();
        list.display(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("COLLECTION POINTS FOR: Plastico\n"));
        let a = out.find("Rua A").unwrap();
        let c = out.find("Rua C").unwrap();
        assert!(a < c);
    }

    #[test]
    fn release_behaves_like_new_list() {
        let mut list: SinglyLinkedList<_> = [point(1, "Vidro", "Rua B")].into_iter().collect();
        list.release();
        assert_eq!(list, SinglyLinkedList::new());

        let mut released = Vec::new();
        list.display(&mut released).unwrap();
        let mut fresh = Vec::new();
        SinglyLinkedList::<CollectionPoint>::new()
            .display(&mut fresh)
            .unwrap();
        assert_eq!(released, fresh);

        list.insert(point(7, "Papel", "Rua Z"));
        assert_eq!(list.iter().map(|p| p.id).collect::<Vec<_>>(), vec![7]);
    }
}
