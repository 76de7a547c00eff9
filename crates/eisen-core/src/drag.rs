use tracing::{debug, warn};
use uuid::Uuid;

use crate::quadrant::Quadrant;
use crate::store::TaskStore;

/// Drag gesture coordinator: `Idle -> Dragging(task) -> Idle`. Transitions
/// are pure; the browser owns gesture capture and cancellation, and the
/// caller applies any resulting store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Uuid),
}

/// What a finished gesture amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    Reassign { task: Uuid, target: Quadrant },
    Abandoned,
}

impl DragState {
    /// The dragging id feeds visual feedback only; no mutation happens here.
    pub fn begin(self, store: &TaskStore, task: Uuid) -> Self {
        if store.contains(task) {
            debug!(%task, "drag start");
            Self::Dragging(task)
        } else {
            warn!(%task, "drag start ignored: unknown task");
            self
        }
    }

    /// A drop was delivered. Anything that is not a quadrant key abandons
    /// the gesture; either way the machine returns to idle.
    pub fn finish(self, task: Uuid, drop_target: Option<&str>) -> (Self, DragEnd) {
        let Self::Dragging(active) = self else {
            warn!(%task, "drop ignored: no drag in progress");
            return (Self::Idle, DragEnd::Abandoned);
        };
        if active != task {
            warn!(%task, %active, "drop payload does not match active drag");
        }

        match drop_target.and_then(Quadrant::from_key) {
            Some(target) => {
                debug!(%task, target = target.as_key(), "drag dropped on quadrant");
                (Self::Idle, DragEnd::Reassign { task, target })
            }
            None => {
                debug!(%task, ?drop_target, "drag abandoned: no quadrant target");
                (Self::Idle, DragEnd::Abandoned)
            }
        }
    }

    /// Gesture ended without a drop being delivered.
    pub fn settle(self) -> Self {
        Self::Idle
    }

    pub fn active(self) -> Option<Uuid> {
        match self {
            Self::Dragging(task) => Some(task),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{DragEnd, DragState};
    use crate::quadrant::Quadrant;
    use crate::store::TaskStore;

    #[test]
    fn begin_records_only_known_tasks() {
        let mut store = TaskStore::new();
        let uuid = store.create("Buy milk", "2024-02-01").expect("create");

        let state = DragState::Idle.begin(&store, uuid);
        assert_eq!(state.active(), Some(uuid));

        let state = DragState::Idle.begin(&store, Uuid::new_v4());
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn finish_on_a_quadrant_key_yields_a_reassignment() {
        let task = Uuid::new_v4();
        let (state, end) = DragState::Dragging(task).finish(task, Some("urgent-important"));

        assert_eq!(state, DragState::Idle);
        assert_eq!(
            end,
            DragEnd::Reassign {
                task,
                target: Quadrant::UrgentImportant,
            }
        );
    }

    #[test]
    fn finish_on_an_unrecognized_target_abandons_the_drag() {
        let task = Uuid::new_v4();
        let other_task = Uuid::new_v4().to_string();

        for target in [None, Some("somewhere"), Some(other_task.as_str())] {
            let (state, end) = DragState::Dragging(task).finish(task, target);
            assert_eq!(state, DragState::Idle);
            assert_eq!(end, DragEnd::Abandoned);
        }
    }

    #[test]
    fn finish_without_an_active_drag_abandons() {
        let (state, end) = DragState::Idle.finish(Uuid::new_v4(), Some("urgent-important"));

        assert_eq!(state, DragState::Idle);
        assert_eq!(end, DragEnd::Abandoned);
    }

    #[test]
    fn settle_always_returns_to_idle() {
        assert_eq!(DragState::Dragging(Uuid::new_v4()).settle(), DragState::Idle);
        assert_eq!(DragState::Idle.settle(), DragState::Idle);
    }
}
