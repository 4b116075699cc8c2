// 🗄️ Store - authoritative live records for ONE entity kind
//
// Owned instance (no process-wide globals), guarded by its own RwLock.
// Each operation holds the lock for its whole duration, so a
// read-modify-write through `modify` is atomic per store.
// list() returns records in insertion order; overwrites keep their slot.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::record::{EntityKind, Record};

#[derive(Debug)]
struct Slots<T> {
    by_id: HashMap<Uuid, Record<T>>,
    order: Vec<Uuid>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Slots {
            by_id: HashMap::new(),
            order: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct Store<T> {
    kind: EntityKind,
    slots: RwLock<Slots<T>>,
}

impl<T: Clone> Store<T> {
    pub fn new(kind: EntityKind) -> Self {
        Store {
            kind,
            slots: RwLock::new(Slots::default()),
        }
    }

    // A panic mid-operation never leaves a half-written record, so poisoned data is still valid
    fn read(&self) -> RwLockReadGuard<'_, Slots<T>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots<T>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(&self, id: Uuid) -> StoreError {
        StoreError::NotFound { kind: self.kind, id }
    }

    /// Insert or overwrite. No uniqueness check.
    pub fn put(&self, record: Record<T>) {
        let mut slots = self.write();
        let id = record.id;

        if slots.by_id.insert(id, record).is_none() {
            slots.order.push(id);
        }
    }

    /// Insert a brand-new record; fails with Conflict if the id is taken
    pub fn insert(&self, record: Record<T>) -> StoreResult<()> {
        let mut slots = self.write();
        let id = record.id;

        if slots.by_id.contains_key(&id) {
            return Err(StoreError::Conflict { kind: self.kind, id });
        }

        slots.by_id.insert(id, record);
        slots.order.push(id);
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> StoreResult<Record<T>> {
        self.read()
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    /// Remove and return the record
    pub fn delete(&self, id: Uuid) -> StoreResult<Record<T>> {
        let mut slots = self.write();

        let removed = slots.by_id.remove(&id).ok_or_else(|| self.not_found(id))?;
        slots.order.retain(|existing| *existing != id);
        Ok(removed)
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<Record<T>> {
        let slots = self.read();

        slots
            .order
            .iter()
            .filter_map(|id| slots.by_id.get(id))
            .cloned()
            .collect()
    }

    /// Replace the stored record with `f(current)` under a single write lock
    pub fn modify<F>(&self, id: Uuid, f: F) -> StoreResult<Record<T>>
    where
        F: FnOnce(&Record<T>) -> Record<T>,
    {
        let mut slots = self.write();

        let current = slots.by_id.get(&id).ok_or_else(|| self.not_found(id))?;
        let next = f(current);
        slots.by_id.insert(id, next.clone());
        Ok(next)
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
