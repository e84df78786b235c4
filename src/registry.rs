/// Per-kind live-entity registry
///
/// Every live entity of one kind sits in a `Registry`, keyed by an `EntityId`
/// handed out at registration. Ids grow monotonically and entries stay in id
/// order, so iteration order is registration order and lookups are a binary
/// search. Removal leaves a tombstone; `compact` sweeps tombstones between
/// ticks without renumbering anything, so handles never go stale by accident.

/// Stable handle to a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: EntityId,
    value: Option<T>,
}

#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
    live: usize,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            live: 0,
        }
    }

    /// Append a live entity and return its handle.
    pub fn register(&mut self, value: T) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            value: Some(value),
        });
        self.live += 1;
        id
    }

    /// Remove an entity by identity, leaving a tombstone in its slot.
    ///
    /// Unknown or already-removed ids are a silent no-op returning `None`.
    pub fn unregister(&mut self, id: EntityId) -> Option<T> {
        let index = self.position(id)?;
        let removed = self.entries[index].value.take();
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        let index = self.position(id)?;
        self.entries[index].value.as_ref()
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        let index = self.position(id)?;
        self.entries[index].value.as_mut()
    }

    /// Live entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.entries
            .iter()
            .filter_map(|e| e.value.as_ref().map(|v| (e.id, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.entries
            .iter_mut()
            .filter_map(|e| e.value.as_mut().map(|v| (e.id, v)))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Slots currently holding a tombstone.
    pub fn tombstones(&self) -> usize {
        self.entries.len() - self.live
    }

    /// Drop tombstoned slots. Ids of the survivors are unchanged.
    pub fn compact(&mut self) {
        if self.tombstones() > 0 {
            self.entries.retain(|e| e.value.is_some());
        }
    }

    /// Discard every entry. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.live = 0;
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |e| e.id).ok()
    }
}
