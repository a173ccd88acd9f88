use crate::errors::{NotADigit, ParseNoteError};
use crate::set::{DigitSet, Iter};
use crate::Digit;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// The pencil-marks a player has noted in one cell of a sudoku.
///
/// A note is a plain value: two bytes, `Copy`, no heap allocation. The board
/// owns one per cell and mutates it in place through [`toggle`](CellNote::toggle)
/// and [`clear`](CellNote::clear).
///
/// Notes convert to and from the comma-separated encoding embedded in
/// save files, e.g. `"3,5,9,"`. See [`FromStr`](#impl-FromStr) and
/// [`Display`](#impl-Display) for the exact rules.
///
/// ## Example
/// ```
/// use cellnote::{CellNote, Digit};
///
/// let mut note: CellNote = "3,5,9,".parse().unwrap();
/// note.toggle(Digit::new(5));
/// assert_eq!(note.to_string(), "3,9,");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct CellNote {
    digits: DigitSet,
}

impl CellNote {
    /// Constructs a note with nothing marked.
    pub fn new() -> Self {
        CellNote::default()
    }

    /// Decodes a note from the nullable string field of a save file.
    ///
    /// `None` stands for a note that was never written and decodes to an
    /// empty note, exactly like `Some("")` and `Some("-")`.
    pub fn from_saved(note: Option<&str>) -> Result<Self, ParseNoteError> {
        match note {
            Some(note) => note.parse(),
            None => Ok(CellNote::new()),
        }
    }

    /// Constructs a note containing the given numbers. Duplicates collapse.
    ///
    /// Returns an error on the first number outside of `1..=9`.
    pub fn from_numbers<I>(numbers: I) -> Result<Self, NotADigit>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut digits = DigitSet::NONE;
        for number in numbers {
            digits.insert(Digit::try_from(number)?);
        }
        Ok(CellNote { digits })
    }

    /// Returns a snapshot of the marked digits.
    ///
    /// The returned set is an independent copy. It costs two bytes,
    /// so the draw path may call this per frame; there is no aliasing
    /// with the note's own storage and no way to mutate the note through it.
    pub fn digits(self) -> DigitSet {
        self.digits
    }

    /// Returns an iterator over the marked digits, in ascending order.
    pub fn iter(self) -> Iter {
        self.digits.into_iter()
    }

    /// Checks if `digit` is marked in this note.
    pub fn contains(self, digit: Digit) -> bool {
        self.digits.contains(digit)
    }

    /// Unmarks everything.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Marks `digit` if it is unmarked, unmarks it otherwise.
    pub fn toggle(&mut self, digit: Digit) {
        self.digits.toggle(digit);
    }

    /// Toggles the mark for an untyped `number`, the entry point for key
    /// and touch input.
    ///
    /// Returns an error for numbers outside of `1..=9` and leaves the note
    /// untouched.
    pub fn toggle_number(&mut self, number: u8) -> Result<(), NotADigit> {
        self.toggle(Digit::try_from(number)?);
        Ok(())
    }

    /// Returns the number of marked digits.
    pub fn len(self) -> u8 {
        self.digits.len()
    }

    /// Returns true, if nothing is marked.
    pub fn is_empty(self) -> bool {
        self.digits.is_empty()
    }

    /// Appends the encoding of this note to `buf`.
    ///
    /// Same output as the [`Display`](#impl-Display) impl, without going
    /// through a formatter. The save writer concatenates many cells into one
    /// buffer and calls this in a loop.
    pub fn encode_into(self, buf: &mut String) {
        if self.digits.is_empty() {
            buf.push('-');
            return;
        }
        for digit in self.digits {
            buf.push((b'0' + digit.get()) as char);
            buf.push(',');
        }
    }
}

/// Encodes the note for embedding in a save file.
///
/// Every digit is followed by a `,`, including the last one. Existing saves
/// all carry the trailing separator, so it is kept for byte-compatibility.
/// An empty note encodes as the placeholder `-`, never
/// as an empty string, which the enclosing field grammar could not tell apart
/// from a missing field.
///
/// Digits are emitted in ascending order. Old saves may contain any order,
/// the decoder does not care.
impl fmt::Display for CellNote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("-");
        }
        for digit in self.digits {
            write!(f, "{},", digit)?;
        }
        Ok(())
    }
}

/// Decodes a note from its saved string form.
///
/// The input is split on `,`. Empty tokens (consecutive or trailing
/// separators) and the `-` placeholder are skipped, every other token must
/// be a decimal number in `1..=9`. An empty input decodes to an empty note.
///
/// Anything else is an error: decoding never guesses at the meaning of a
/// corrupt note. That includes out-of-range numbers. The grammar admits any
/// integer on paper, but a well-formed save never contains one, since all
/// writes go through the range-checked toggle.
impl FromStr for CellNote {
    type Err = ParseNoteError;

    fn from_str(note: &str) -> Result<Self, ParseNoteError> {
        let mut digits = DigitSet::NONE;
        for token in note.split(',') {
            if token.is_empty() || token == "-" {
                continue;
            }
            let value = token
                .parse::<i64>()
                .map_err(|_| ParseNoteError::InvalidToken {
                    token: token.to_owned(),
                })?;
            let digit = u8::try_from(value)
                .ok()
                .and_then(Digit::new_checked)
                .ok_or(ParseNoteError::OutOfRange { value })?;
            digits.insert(digit);
        }
        Ok(CellNote { digits })
    }
}

impl From<DigitSet> for CellNote {
    fn from(digits: DigitSet) -> Self {
        CellNote { digits }
    }
}

impl FromIterator<Digit> for CellNote {
    fn from_iter<I: IntoIterator<Item = Digit>>(digits: I) -> Self {
        CellNote {
            digits: digits.into_iter().collect(),
        }
    }
}

impl Extend<Digit> for CellNote {
    fn extend<I: IntoIterator<Item = Digit>>(&mut self, digits: I) {
        self.digits.extend(digits);
    }
}

impl IntoIterator for CellNote {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.digits.into_iter()
    }
}

impl IntoIterator for &CellNote {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.digits.into_iter()
    }
}
