//! Interactive record filters over linked lists
//!
//! Records are read from delimited flat files, filtered by a user-supplied
//! value, and loaded into one of three arena-backed linked lists for display
//! and navigation.
//!
//! ```
//! use linked_records::{CollectionPoint, SinglyLinkedList, storage::matching};
//!
//! let data = "1;Plastico;Rua A\n2;Vidro;Rua B\n3;Plastico;Rua C\n";
//! let list: SinglyLinkedList<CollectionPoint> = matching(data.as_bytes(), ';', "Plastico")
//!     .collect::<std::io::Result<_>>()
//!     .unwrap();
//!
//! let ids: Vec<i32> = list.iter().map(|point| point.id).collect();
//! assert_eq!(ids, [1, 3]);
//! ```

pub mod domain;
pub use domain::{CollectionPoint, Config, ParseError, ProgramConfig, Record, Rotation, Route};

pub mod list;
pub use list::{CircularList, DoublyLinkedList, SinglyLinkedList};

pub mod console;
pub use console::Console;

pub mod present;

/// Delimited record files.
pub mod storage;
pub use storage::{RecordFile, SourceError};
