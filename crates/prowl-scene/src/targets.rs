//! Explicit target registry.
//!
//! Replaces global tag lookup: the host publishes target positions under
//! [`TargetId`]s each frame, and each agent holds a [`BoardLocator`] handle
//! for the one target it cares about.  A withdrawn or never-published target
//! resolves to `None`, which the behavior machine treats as "out of range".

use prowl_core::{TargetId, Vec3};
use rustc_hash::FxHashMap;

use crate::ports::TargetLocator;

/// Host-owned registry of live target positions.
#[derive(Default)]
pub struct TargetBoard {
    positions: FxHashMap<TargetId, Vec3>,
}

impl TargetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish (or refresh) `id`'s position.  Hosts call this every frame for
    /// moving targets.
    pub fn publish(&mut self, id: TargetId, position: Vec3) {
        self.positions.insert(id, position);
    }

    /// Remove `id` from the board.  Subsequent resolution fails closed.
    pub fn withdraw(&mut self, id: TargetId) -> Option<Vec3> {
        self.positions.remove(&id)
    }

    pub fn position(&self, id: TargetId) -> Option<Vec3> {
        self.positions.get(&id).copied()
    }

    /// A [`TargetLocator`] view bound to `id`, to be passed into an agent's
    /// tick.  Cheap to construct; borrow one fresh each frame.
    pub fn locator(&self, id: TargetId) -> BoardLocator<'_> {
        BoardLocator { board: self, id }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Borrowed locator handle for one target on a [`TargetBoard`].
#[derive(Clone, Copy)]
pub struct BoardLocator<'a> {
    board: &'a TargetBoard,
    id:    TargetId,
}

impl BoardLocator<'_> {
    pub fn id(&self) -> TargetId {
        self.id
    }
}

impl TargetLocator for BoardLocator<'_> {
    fn current_target_position(&self) -> Option<Vec3> {
        self.board.position(self.id)
    }
}
