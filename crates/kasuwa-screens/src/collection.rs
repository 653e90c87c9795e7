//! Ordered record collections with single-default semantics.
//!
//! The address book and the payment wallet are the same machine over
//! different record types: an ordered list where at most one record
//! carries the default flag. [`CollectionStore`] is that machine.
//!
//! Every operation is synchronous and all-or-nothing over the single
//! collection: a failed validation or lookup leaves the records exactly
//! as they were.

use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::ids::RecordId;

/// One entry in a user-manageable collection.
pub trait Record {
    /// The record's unique id within its collection.
    fn id(&self) -> &RecordId;

    /// Replace the record's id (used when the store assigns a fresh one).
    fn set_id(&mut self, id: RecordId);

    /// Whether this is the collection's preferred record.
    fn is_default(&self) -> bool;

    /// Set or clear the default flag.
    fn set_is_default(&mut self, value: bool);

    /// Check required fields are present and non-blank.
    fn validate(&self) -> Result<(), CommerceError>;
}

/// An ordered collection of records, at most one of them default.
///
/// Insertion order is display order and survives edits: `update`
/// replaces a record in place, it never moves it.
#[derive(Debug, Clone)]
pub struct CollectionStore<T: Record> {
    kind: &'static str,
    records: Vec<T>,
}

impl<T: Record> CollectionStore<T> {
    /// Create an empty collection. `kind` names the record type in
    /// errors and logs (e.g., "address").
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    /// Create a collection from pre-seeded records. The caller is
    /// responsible for seed ids being unique and at most one default.
    pub fn with_records(kind: &'static str, records: Vec<T>) -> Self {
        Self { kind, records }
    }

    /// Validate and append a record.
    ///
    /// A fresh id is assigned, and the record becomes the default iff
    /// the collection was empty. Returns the assigned id.
    pub fn add(&mut self, mut candidate: T) -> Result<RecordId, CommerceError> {
        candidate.validate()?;

        let id = RecordId::generate();
        candidate.set_id(id.clone());
        candidate.set_is_default(self.records.is_empty());
        self.records.push(candidate);

        tracing::debug!(collection = self.kind, id = %id, "record added");
        Ok(id)
    }

    /// Validate and replace the record with the given id, in place.
    ///
    /// The record keeps its position and its id; the candidate's default
    /// flag is taken as-is, since an edit form is seeded from the record
    /// it edits and round-trips an unchanged flag.
    pub fn update(&mut self, id: &RecordId, mut candidate: T) -> Result<(), CommerceError> {
        candidate.validate()?;

        let position = self
            .position(id)
            .ok_or_else(|| CommerceError::not_found(self.kind, id.as_str()))?;

        candidate.set_id(id.clone());
        self.records[position] = candidate;

        tracing::debug!(collection = self.kind, id = %id, "record updated");
        Ok(())
    }

    /// Remove and return the record with the given id.
    ///
    /// Removing the default record promotes nothing: the collection is
    /// left with no default until the user picks one.
    pub fn remove(&mut self, id: &RecordId) -> Result<T, CommerceError> {
        let position = self
            .position(id)
            .ok_or_else(|| CommerceError::not_found(self.kind, id.as_str()))?;

        let removed = self.records.remove(position);
        tracing::debug!(collection = self.kind, id = %id, "record removed");
        Ok(removed)
    }

    /// Make the record with the given id the sole default.
    pub fn set_default(&mut self, id: &RecordId) -> Result<(), CommerceError> {
        if self.position(id).is_none() {
            return Err(CommerceError::not_found(self.kind, id.as_str()));
        }

        for record in &mut self.records {
            record.set_is_default(record.id() == id);
        }

        tracing::debug!(collection = self.kind, id = %id, "default changed");
        Ok(())
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The current default record, if any.
    pub fn default_record(&self) -> Option<&T> {
        self.records.iter().find(|r| r.is_default())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
