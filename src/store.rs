use crate::models::{Student, Teacher};

pub trait Record {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

impl Record for Student {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Record for Teacher {
    type Key = String;

    fn key(&self) -> String {
        self.username.clone()
    }
}

/// Ordered cache of the last successful list/search fetch. The server is
/// authoritative: entries are only ever mutated after a round trip.
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn prepend(&mut self, record: R) {
        self.records.insert(0, record);
    }

    pub fn patch(&mut self, record: R) -> bool {
        let key = record.key();
        match self.records.iter_mut().find(|entry| entry.key() == key) {
            Some(entry) => {
                *entry = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &R::Key) -> bool {
        let before = self.records.len();
        self.records.retain(|entry| entry.key() != *key);
        before != self.records.len()
    }

    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.records.iter().find(|entry| entry.key() == *key)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
