//! Arena-backed linked lists.
//!
//! Every variant stores its nodes in a `Vec` owned by the list and links them
//! by index. Releasing a list clears the arena in one step.

/// Singly-linked append list.
pub mod singly;
pub use singly::SinglyLinkedList;

/// Doubly-linked list with forward and reverse traversal.
pub mod doubly;
pub use doubly::DoublyLinkedList;

/// Circular singly-linked list with wrap-around navigation.
pub mod circular;
pub use circular::{CircularList, Cursor};

/// Index of a node in a list's arena, or `None` when the link is absent.
pub type Link = Option<usize>;
