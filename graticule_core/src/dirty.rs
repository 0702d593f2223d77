// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! A [`PropertyStore`](crate::slot::PropertyStore) uses multi-channel dirty
//! tracking (via [`understory_dirty`]) so that renderers re-upload only the
//! property slots that actually changed since the last frame. Each channel
//! represents an independent category of change:
//!
//! - [`VALUE`] is marked when an existing slot's bound style value is
//!   replaced. The slot's evaluated output may differ on the next frame even
//!   at an unchanged zoom.
//!
//! - [`BINDING`] is marked when a slot is bound or unbound. Consumers use it
//!   together with the store's added/removed lists to allocate or retire
//!   per-slot renderer state.
//!
//! Slots have no dependency edges; style values are self-contained, so
//! dirtiness never propagates between slots. Callers never query dirty state
//! directly: each
//! [`PropertyStore::drain_changes`](crate::slot::PropertyStore::drain_changes)
//! call drains both channels and surfaces the results as
//! [`PropertyChanges`](crate::slot::PropertyChanges).

use understory_dirty::Channel;

/// The slot's bound style value was replaced.
pub const VALUE: Channel = Channel::new(0);

/// The slot was bound or unbound.
pub const BINDING: Channel = Channel::new(1);
