use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    name: String,
    address: String,
}

impl ClientRecord {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Ordered list of clients to report on. Records are kept in insertion
/// order, duplicates included, and the list never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCollection {
    records: Vec<ClientRecord>,
}

impl ClientCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: ClientRecord) {
        self.records.push(record);
    }

    /// Read-only view of every record in insertion order. The collection
    /// cannot be changed while the slice is borrowed.
    pub fn all(&self) -> &[ClientRecord] {
        &self.records
    }

    /// Owned copy of the current records, unaffected by later adds.
    pub fn snapshot(&self) -> Vec<ClientRecord> {
        self.records.clone()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ClientRecord> {
        self.records.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClientRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ClientRecord> for ClientCollection {
    fn from_iter<I: IntoIterator<Item = ClientRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl Extend<ClientRecord> for ClientCollection {
    fn extend<I: IntoIterator<Item = ClientRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl<'a> IntoIterator for &'a ClientCollection {
    type Item = &'a ClientRecord;
    type IntoIter = std::slice::Iter<'a, ClientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
