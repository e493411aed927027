use std::{fmt, io};

use crate::{list::Link, present::Tabular};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    value: T,
    next: Link,
    prev: Link,
}

/// Direction of a [`DoublyLinkedList`] traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    /// Head to tail, i.e. insertion order.
    Forward,
    /// Tail to head.
    Reverse,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("FORWARD ORDER"),
            Self::Reverse => f.write_str("REVERSE ORDER"),
        }
    }
}

/// A doubly-linked list that appends at the tail.
///
/// Only the head is tracked. The tail is found by following `next` links
/// whenever it is needed, both for insertion and for reverse traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Link,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Appends `value` at the tail, linking it back to the former tail.
    pub fn insert(&mut self, value: T) {
        let index = self.nodes.len();
        let prev = self.tail();
        self.nodes.push(Node {
            value,
            next: None,
            prev,
        });
        match prev {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
    }

    /// Walks from the head to the last node.
    fn tail(&self) -> Link {
        let mut current = self.head?;
        while let Some(next) = self.nodes[current].next {
            current = next;
        }
        Some(current)
    }

    /// Iterates head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            order: Order::Forward,
        }
    }

    /// Iterates tail to head.
    ///
    /// The tail is located first by walking forward from the head, then the
    /// iterator follows `prev` links back.
    #[must_use]
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.tail(),
            order: Order::Reverse,
        }
    }

    fn iter_in(&self, order: Order) -> Iter<'_, T> {
        match order {
            Order::Forward => self.iter(),
            Order::Reverse => self.iter_rev(),
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

    /// Drops every node at once.
    pub fn release(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}

impl<T: Tabular> DoublyLinkedList<T> {
    /// Writes the list head to tail.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn display_forward(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.display(out, Order::Forward)
    }

    /// Writes the list tail to head.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn display_reverse(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.display(out, Order::Reverse)
    }

    fn display(&self, out: &mut impl io::Write, order: Order) -> io::Result<()> {
        let mut rows = self.iter_in(order).peekable();
        let Some(first) = rows.peek() else {
            return writeln!(out, "{}", T::NOT_FOUND);
        };
        let title = format!("{} - {order}:", first.title());
        crate::present::write_table(out, &title, rows)
    }
}

/// Iterator over a [`DoublyLinkedList`] in either direction.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: Link,
    order: Order,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];
        self.current = match self.order {
            Order::Forward => node.next,
            Order::Reverse => node.prev,
        };
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
