//! Group the entries of a directory into subfolders by approximate name
//! similarity.
//!
//! Every entry is compared against every other entry by base name (the name
//! with its extension removed) using a normalized Levenshtein score. When an
//! entry has neighbours scoring at or above the threshold, a folder named
//! `"{base} (and {n} similar)"` is created and the whole group is moved into it.
//!
//! # Organizing a directory
//!
//! ```no_run
//! use simfold::Organizer;
//!
//! let report = Organizer::new()
//!     .threshold(0.8)
//!     .organize("Downloads")?;
//! for group in &report.groups {
//!     println!("{}: {} entries", group.folder, group.members.len() + 1);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Dry runs
//!
//! [`Organizer::plan`] runs the same algorithm against an in-memory copy of
//! the directory listing and leaves the disk untouched. Any other backing store
//! can be plugged in through the [`Filesystem`] trait and
//! [`Organizer::organize_with`].
//!
//! # Error handling
//!
//! Every failure is an [`OrganizeError`], which implements
//! [`miette::Diagnostic`]. A run stops at the first error; folders already
//! created and entries already moved stay where they are.

pub mod error;
pub mod fs;
pub mod name;
pub mod organizer;
pub mod similarity;

pub use error::OrganizeError;
pub use fs::{Filesystem, MemoryFs, RealFs};
pub use name::{base_name, split_name};
pub use organizer::{DEFAULT_THRESHOLD, Group, OrganizeReport, Organizer, group_folder_name};
pub use similarity::{levenshtein, similarity};
