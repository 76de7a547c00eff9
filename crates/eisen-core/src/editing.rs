use tracing::{info, warn};
use uuid::Uuid;

use crate::store::TaskStore;
use crate::task::Task;

/// Raw, unvalidated form text. Validation happens in the store when the
/// draft is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub due: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            due: task.due.to_string(),
        }
    }
}

/// The single inline-edit selection. At most one session exists at a time;
/// it is held as an `Option<EditSession>` at the top of the component tree,
/// and replacing it silently abandons the previous draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task: Uuid,
    pub draft: TaskDraft,
}

impl EditSession {
    pub fn begin(store: &TaskStore, task: Uuid) -> Option<Self> {
        let Some(existing) = store.get(task) else {
            warn!(%task, "edit ignored: unknown task");
            return None;
        };

        info!(%task, "edit session opened");
        Some(Self {
            task,
            draft: TaskDraft::from_task(existing),
        })
    }

    /// Commits the draft. `false` means the store rejected it and the form
    /// should stay open for correction.
    pub fn save(&self, store: &mut TaskStore) -> bool {
        store.update(self.task, &self.draft.title, &self.draft.due)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::EditSession;
    use crate::store::TaskStore;

    #[test]
    fn begin_seeds_the_draft_from_current_fields() {
        let mut store = TaskStore::new();
        let uuid = store.create("Buy milk", "2024-02-01").expect("create");

        let session = EditSession::begin(&store, uuid).expect("session");
        assert_eq!(session.task, uuid);
        assert_eq!(session.draft.title, "Buy milk");
        assert_eq!(session.draft.due, "2024-02-01");
    }

    #[test]
    fn begin_on_an_unknown_task_yields_none() {
        let store = TaskStore::new();
        assert_eq!(EditSession::begin(&store, Uuid::new_v4()), None);
    }

    #[test]
    fn save_commits_a_complete_draft() {
        let mut store = TaskStore::new();
        let uuid = store.create("Buy milk", "2024-02-01").expect("create");

        let mut session = EditSession::begin(&store, uuid).expect("session");
        session.draft.title = "Buy oat milk".to_string();
        session.draft.due = "2024-03-01".to_string();

        assert!(session.save(&mut store));
        let task = store.get(uuid).expect("task");
        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.due.to_string(), "2024-03-01");
    }

    #[test]
    fn save_rejects_an_incomplete_draft_and_leaves_the_task_alone() {
        let mut store = TaskStore::new();
        let uuid = store.create("Buy milk", "2024-02-01").expect("create");

        let mut session = EditSession::begin(&store, uuid).expect("session");
        session.draft.title = String::new();

        assert!(!session.save(&mut store));
        assert_eq!(store.get(uuid).expect("task").title, "Buy milk");
    }

    #[test]
    fn switching_sessions_abandons_the_previous_draft() {
        let mut store = TaskStore::new();
        let first = store.create("First", "2024-02-01").expect("create");
        let second = store.create("Second", "2024-02-02").expect("create");

        let mut editing = EditSession::begin(&store, first);
        if let Some(session) = editing.as_mut() {
            session.draft.title = "First, reworded".to_string();
        }

        // a new start simply replaces the slot; nothing was committed
        editing = EditSession::begin(&store, second);
        assert_eq!(editing.expect("session").task, second);
        assert_eq!(store.get(first).expect("task").title, "First");
    }
}
