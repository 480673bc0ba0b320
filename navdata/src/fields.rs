//! Field-descriptor projection of navigation records.
//!
//! Every record type exposed to a host declares one static table of
//! [`FieldDescriptor`]s. Hosts never hand-serialize records: they walk the
//! table through [`Record::fields`], or serialize a [`FieldMap`] with serde,
//! so the order and naming of fields is defined in exactly one place.
//!
//! ```ignore
//! use navdata::fields::{FieldMap, Record};
//!
//! for (name, value) in airport.fields() {
//!     println!("{name} = {value}");
//! }
//! let json = serde_json::to_string(&FieldMap(&airport))?;
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Kind of value a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// A borrowed field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// Name, kind and accessor of one record field.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub read: for<'a> fn(&'a T) -> FieldValue<'a>,
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A record with a static field table.
pub trait Record: Sized + 'static {
    /// Field descriptors in output order.
    const FIELDS: &'static [FieldDescriptor<Self>];

    /// Iterate `(name, value)` pairs in descriptor order.
    fn fields(&self) -> impl Iterator<Item = (&'static str, FieldValue<'_>)> {
        Self::FIELDS.iter().map(move |d| (d.name, (d.read)(self)))
    }

    /// Look up a single field by name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Self::FIELDS
            .iter()
            .find(|d| d.name == name)
            .map(|d| (d.read)(self))
    }
}

/// Serializes a record as a map in descriptor order.
pub struct FieldMap<'a, T>(pub &'a T);

impl<T: Record> Serialize for FieldMap<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(T::FIELDS.len()))?;
        for (name, value) in self.0.fields() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Declare a text field backed by a `String` member.
#[macro_export]
macro_rules! text_field {
    ($record:ty, $name:literal, $member:ident) => {
        $crate::fields::FieldDescriptor {
            name: $name,
            kind: $crate::fields::FieldKind::Text,
            read: {
                fn read(r: &$record) -> $crate::fields::FieldValue<'_> {
                    $crate::fields::FieldValue::Text(r.$member.as_str())
                }
                read
            },
        }
    };
}

/// Declare a numeric field backed by an `f64` member.
#[macro_export]
macro_rules! number_field {
    ($record:ty, $name:literal, $member:ident) => {
        $crate::fields::FieldDescriptor {
            name: $name,
            kind: $crate::fields::FieldKind::Number,
            read: {
                fn read(r: &$record) -> $crate::fields::FieldValue<'_> {
                    $crate::fields::FieldValue::Number(r.$member)
                }
                read
            },
        }
    };
}
