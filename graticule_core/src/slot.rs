// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property slot storage with binding and change tracking.
//!
//! A [`PropertyStore`] owns the style values bound to one layer type's
//! paint properties. Slots are addressed by [`PropertyId`] handles; freed
//! slots are recycled via a free list, and generation counters prevent
//! stale handle access. Bound values are held behind [`Arc`] so render
//! threads can snapshot a value and evaluate it without holding the store.
//!
//! Change consumption follows a drain pattern:
//! [`drain_changes`](PropertyStore::drain_changes) empties the dirty
//! channels ([`VALUE`](crate::dirty::VALUE) and
//! [`BINDING`](crate::dirty::BINDING)) plus the added/removed lists and
//! returns them as [`PropertyChanges`], which renderers use to re-upload
//! only the slots that changed since the last frame.

use alloc::sync::Arc;
use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use crate::attribute::FeatureAttributes;
use crate::dirty;
use crate::style_type::StyleType;
use crate::trace::BindingChangesEvent;
use crate::value::StyleValue;

/// A handle to a property slot in a [`PropertyStore`].
///
/// Contains both a slot index and a generation counter so that stale
/// handles can be detected after a slot is unbound and reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId {
    /// Slot index into the store's arrays.
    pub(crate) idx: u32,
    /// Generation counter, must match the store's generation for this slot.
    pub(crate) generation: u32,
}

impl PropertyId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl core::fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PropertyId({}@gen{})", self.idx, self.generation)
    }
}

/// The set of changes produced by a single
/// [`PropertyStore::drain_changes`] call.
///
/// Each field contains the raw slot indices of slots that changed in the
/// corresponding category. Renderers use these to apply incremental
/// updates.
#[derive(Clone, Debug, Default)]
pub struct PropertyChanges {
    /// Slots whose bound value was replaced.
    pub values: Vec<u32>,
    /// Slots bound since the last drain.
    pub added: Vec<u32>,
    /// Slots unbound since the last drain.
    pub removed: Vec<u32>,
}

impl PropertyChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.values.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Whether no slots changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }

    /// Condenses the change lists into a trace event.
    #[must_use]
    pub fn summary(&self) -> BindingChangesEvent {
        BindingChangesEvent {
            values: self.values.len(),
            added: self.added.len(),
            removed: self.removed.len(),
        }
    }
}

/// Slot storage for the style values bound to one property type.
#[derive(Debug)]
pub struct PropertyStore<T> {
    value: Vec<Option<Arc<StyleValue<T>>>>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
    len: u32,
    dirty: DirtyTracker<u32>,
    pending_added: Vec<u32>,
    pending_removed: Vec<u32>,
}

impl<T: StyleType> Default for PropertyStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StyleType> PropertyStore<T> {
    /// Creates an empty property store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    /// Binds a style value into a fresh slot and returns its handle.
    pub fn bind(&mut self, value: StyleValue<T>) -> PropertyId {
        let value = Arc::new(value);
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.value[idx as usize] = Some(value);
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.value.push(Some(value));
            self.generation.push(0);
            idx
        };

        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::BINDING);

        PropertyId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Replaces the slot's bound value, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn replace(&mut self, id: PropertyId, value: StyleValue<T>) -> Arc<StyleValue<T>> {
        self.validate(id);
        let previous = self.value[id.idx as usize].replace(Arc::new(value));
        self.dirty.mark(id.idx, dirty::VALUE);
        // A live slot always holds a value.
        previous.unwrap_or_else(|| unreachable!())
    }

    /// Unbinds a slot, freeing it for reuse and returning its value.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn unbind(&mut self, id: PropertyId) -> Arc<StyleValue<T>> {
        self.validate(id);
        let idx = id.idx;
        let value = self.value[idx as usize].take();

        self.dirty.remove_key(idx);
        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;

        self.free_list.push(idx);
        self.pending_removed.push(idx);
        self.dirty.mark(idx, dirty::BINDING);

        value.unwrap_or_else(|| unreachable!())
    }

    /// Returns whether the given handle refers to a live slot.
    #[must_use]
    pub fn is_alive(&self, id: PropertyId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && self.value[id.idx as usize].is_some()
    }

    /// The slot's bound value.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn value(&self, id: PropertyId) -> &Arc<StyleValue<T>> {
        self.validate(id);
        // A live slot always holds a value.
        self.value[id.idx as usize]
            .as_ref()
            .unwrap_or_else(|| unreachable!())
    }

    /// Clones out the slot's bound value for evaluation off the store.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn snapshot(&self, id: PropertyId) -> Arc<StyleValue<T>> {
        Arc::clone(self.value(id))
    }

    /// The value at a raw slot index, for change-list consumers.
    #[must_use]
    pub fn value_at(&self, idx: u32) -> Option<&StyleValue<T>> {
        self.value
            .get(idx as usize)
            .and_then(|v| v.as_deref())
    }

    /// Evaluates the slot's value in place.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn evaluate(&self, id: PropertyId, zoom: f64, feature: &FeatureAttributes) -> T {
        self.value(id).evaluate(zoom, feature)
    }

    /// The number of live slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    /// Whether the store has no live slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot_count() == 0
    }

    /// Drains the accumulated changes, returning the set of slots a
    /// renderer must re-upload.
    pub fn drain_changes(&mut self) -> PropertyChanges {
        let mut changes = PropertyChanges::default();
        self.drain_changes_into(&mut changes);
        changes
    }

    /// Like [`drain_changes`](Self::drain_changes), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn drain_changes_into(&mut self, changes: &mut PropertyChanges) {
        changes.clear();

        changes
            .values
            .extend(self.dirty.drain(dirty::VALUE).affected().deterministic().run());
        // Added/removed are tracked explicitly; the channel only needs to
        // be emptied.
        _ = self
            .dirty
            .drain(dirty::BINDING)
            .affected()
            .deterministic()
            .run()
            .count();

        changes.added.append(&mut self.pending_added);
        changes.removed.append(&mut self.pending_removed);
        // A slot replaced and then unbound in the same frame stays out of
        // the values list.
        changes
            .values
            .retain(|idx| !changes.removed.contains(idx));
    }

    fn validate(&self, id: PropertyId) {
        assert!(self.is_alive(id), "stale property handle: {id:?}");
    }
}
