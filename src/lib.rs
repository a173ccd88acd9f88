#![warn(missing_docs)]
//! Pencil-mark notes for sudoku cells
//!
//! ## Overview
//!
//! A cell note is the set of candidate digits (1 to 9) a player has marked
//! in one cell. This crate provides [`CellNote`], the note value itself, and
//! its conversions to and from the comma-separated text encoding that the
//! save format embeds, one field per cell.
//!
//! The note is a leaf value: two bytes, `Copy`, no game logic. Board state,
//! rendering and the enclosing save format live elsewhere and only talk to
//! notes through the operations here.
//!
//! ## Example
//!
//! ```
//! use cellnote::{CellNote, Digit};
//!
//! // A note as read from a save file. Trailing separators are part of
//! // the format.
//! let mut note: CellNote = "3,5,9,".parse().unwrap();
//! assert!(!note.is_empty());
//!
//! // The player unmarks 5 and marks 1.
//! note.toggle(Digit::new(5));
//! note.toggle(Digit::new(1));
//! assert_eq!(note.to_string(), "1,3,9,");
//!
//! // An empty note encodes as the `-` placeholder.
//! note.clear();
//! assert_eq!(note.to_string(), "-");
//! ```

mod digit;
pub mod errors;
mod note;
pub mod set;
#[cfg(feature = "serde")]
mod serde;

pub use crate::digit::Digit;
pub use crate::note::CellNote;
pub use crate::set::DigitSet;
