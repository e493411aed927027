use std::io::{self, BufRead, Write};

use crate::{
    console::Console,
    list::Link,
    present::{Card, Tabular},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    value: T,
    next: usize,
}

/// A circular singly-linked list.
///
/// Both ends are cached so that insertion is O(1). While the list is
/// non-empty the tail always links back to the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularList<T> {
    nodes: Vec<Node<T>>,
    head: Link,
    tail: Link,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Inserts `value` after the tail, making it the new tail.
    pub fn insert(&mut self, value: T) {
        let index = self.nodes.len();
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.nodes.push(Node { value, next: head });
                self.nodes[tail].next = index;
            }
            _ => {
                self.nodes.push(Node { value, next: index });
                self.head = Some(index);
            }
        }
        self.tail = Some(index);
    }

    /// The head record, if any.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.map(|index| &self.nodes[index].value)
    }

    /// The tail record, if any.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|index| &self.nodes[index].value)
    }

    /// Visits each node once, starting at the head.
    ///
    /// The walk ends when the next link leads back to the head.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.head,
            current: self.head,
        }
    }

    /// A cursor positioned at the head, or `None` if the list is empty.
    #[must_use]
    pub fn cursor(&self) -> Option<Cursor<'_, T>> {
        self.head.map(|current| Cursor {
            nodes: &self.nodes,
            current,
        })
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

    /// Drops every node and clears both ends.
    pub fn release(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T: Tabular> CircularList<T> {
    /// Writes every node once, head first.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn display_all(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(head) = self.head() else {
            return writeln!(out, "{}", T::NOT_FOUND);
        };
        crate::present::write_table(out, &head.title(), self.iter())
    }
}

impl<T: Tabular + Card> CircularList<T> {
    /// Shows one record at a time, advancing while the user answers `yes`.
    ///
    /// There is no natural end: past the tail the cursor wraps to the head.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn navigate<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        yes: char,
    ) -> io::Result<()> {
        let Some(mut cursor) = self.cursor() else {
            return writeln!(console.out(), "\n{}", T::NOT_FOUND);
        };
        let prompt = format!("\nShow next vehicle? ({yes}/N): ");
        loop {
            writeln!(console.out(), "\n{}", cursor.get().card())?;
            if !console.confirm(&prompt, yes)? {
                return Ok(());
            }
            cursor.advance();
        }
    }
}

/// Single-pass iterator over a [`CircularList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    head: Link,
    current: Link,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];
        self.current = Some(node.next).filter(|&next| Some(next) != self.head);
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A position in a non-empty [`CircularList`] that wraps around forever.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a, T> {
    nodes: &'a [Node<T>],
    current: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// The record under the cursor.
    #[must_use]
    pub fn get(&self) -> &'a T {
        &self.nodes[self.current].value
    }

    /// Moves to the next node, wrapping from tail to head.
    pub fn advance(&mut self) {
        self.current = self.nodes[self.current].next;
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::Rotation;

    fn rotation(plate: &str) -> Rotation {
        Rotation {
            plate: plate.to_string(),
            weekday: "Segunda-feira".to_string(),
            time: "07:00-10:00".to_string(),
        }
    }

    #[test]
    fn single_node_links_to_itself() {
        let mut list = CircularList::new();
        list.insert('a');
        assert_eq!(list.nodes[0].next, 0);
        assert_eq!(list.head, Some(0));
        assert_eq!(list.tail, Some(0));
    }

    #[test]
    fn tail_links_back_to_head() {
        let list: CircularList<_> = ['a', 'b', 'c'].into_iter().collect();
        assert_eq!(list.head(), Some(&'a'));
        assert_eq!(list.tail(), Some(&'c'));
        assert_eq!(list.nodes[2].next, 0);
        assert_eq!(list.iter().copied().collect::<String>(), "abc");
    }

    #[test_case(1; "one")]
    #[test_case(2; "two")]
    #[test_case(7; "seven")]
    fn cursor_returns_to_head_after_exactly_n_steps(n: usize) {
        let list: CircularList<_> = (0..n).collect();
        let mut cursor = list.cursor().unwrap();
        let head = cursor.current;
        for step in 1..=n {
            cursor.advance();
            if step < n {
                assert_ne!(cursor.current, head, "back at head after {step} steps");
            }
        }
        assert_eq!(cursor.current, head);
        assert_eq!(list.len(), n);
    }

    #[test]
    fn cursor_wraps_around_forever() {
        let list: CircularList<_> = [1, 2, 3].into_iter().collect();
        let mut cursor = list.cursor().unwrap();
        let seen: Vec<_> = (0..7)
            .map(|_| {
                let value = *cursor.get();
                cursor.advance();
                value
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn empty_list_has_no_cursor() {
        let list = CircularList::<u8>::new();
        assert!(list.cursor().is_none());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn display_all_shows_each_node_once() {
        let list: CircularList<_> = [rotation("ABC1234"), rotation("XYZ9876")]
            .into_iter()
            .collect();
        let mut out = Vec::new();
        list.display_all(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("VEHICLES IN ROTATION:\n"));
        assert_eq!(out.matches("ABC1234").count(), 1);
        assert_eq!(out.matches("XYZ9876").count(), 1);
    }

    #[test]
    fn navigate_wraps_until_user_stops() {
        let list: CircularList<_> = [rotation("AAA0001"), rotation("BBB0002")]
            .into_iter()
            .collect();
        let mut console = Console::new("s\nS\ns\nn\n".as_bytes(), Vec::new());
        list.navigate(&mut console, 's').unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        let plates: Vec<_> = out
            .lines()
            .filter_map(|line| line.strip_prefix("PLATE: "))
            .collect();
        assert_eq!(plates, vec!["AAA0001", "BBB0002", "AAA0001", "BBB0002"]);
    }

    #[test]
    fn navigate_stops_at_end_of_input() {
        let list: CircularList<_> = [rotation("AAA0001")].into_iter().collect();
        let mut console = Console::new("s\ns\n".as_bytes(), Vec::new());
        list.navigate(&mut console, 's').unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("PLATE: AAA0001").count(), 3);
    }

    #[test]
    fn release_behaves_like_new_list() {
        let mut list: CircularList<_> = [rotation("AAA0001")].into_iter().collect();
        list.release();
        assert_eq!(list, CircularList::new());

        let mut out = Vec::new();
        list.display_all(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Empty list.\n");

        let mut console = Console::new("s\n".as_bytes(), Vec::new());
        list.navigate(&mut console, 's').unwrap();
        assert_eq!(console.into_output(), b"\nEmpty list.\n");
    }
}
