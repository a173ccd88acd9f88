//! Serde impls, activated by the `serde` feature.
//!
//! Notes serialize as their string encoding, so a serialized board embeds
//! them as the same `"3,5,9,"` fields the save format uses.

use crate::CellNote;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for CellNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellNote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NoteVisitor)
    }
}

struct NoteVisitor;

impl<'de> Visitor<'de> for NoteVisitor {
    type Value = CellNote;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a cell note string such as \"3,5,9,\" or \"-\"")
    }

    fn visit_str<E: de::Error>(self, note: &str) -> Result<CellNote, E> {
        note.parse().map_err(E::custom)
    }
}
