//! AddressBook: the name-keyed collection of records for a session.

use super::record::Record;
use serde::{Deserialize, Serialize};

/// Records keyed by name, iterated in insertion order.
///
/// Names are unique. Adding a record whose name is already present replaces
/// the stored record but keeps its original position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StoredAddressBook")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// On-disk shape; routed through `add_record` so duplicate names collapse.
#[derive(Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<StoredAddressBook> for AddressBook {
    fn from(stored: StoredAddressBook) -> Self {
        stored.records.into_iter().collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    /// Exact-match lookup by name, for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |index| &mut self.records[index])
    }

    /// Remove the record with this name, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|index| self.records.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}
