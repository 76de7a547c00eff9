use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::quadrant::Quadrant;
use crate::task::Task;

/// In-memory task collection. The store is the sole owner of task records;
/// invalid input never mutates it, it only produces a logged no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

fn parse_due(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three illustrative tasks shown on first load.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (title, due, quadrant) in [
            (
                "Fix critical bug in production",
                "2024-01-15",
                Quadrant::UrgentImportant,
            ),
            (
                "Plan quarterly review",
                "2024-01-30",
                Quadrant::NotUrgentImportant,
            ),
            (
                "Respond to non-critical emails",
                "2024-01-16",
                Quadrant::UrgentNotImportant,
            ),
        ] {
            if let Some(uuid) = store.create(title, due) {
                store.reassign(uuid, quadrant);
            }
        }
        store
    }

    #[tracing::instrument(skip(self))]
    pub fn create(&mut self, title: &str, due: &str) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            warn!("create rejected: empty title");
            return None;
        }
        let Some(parsed) = parse_due(due) else {
            warn!(raw = due, "create rejected: invalid due date");
            return None;
        };

        let task = Task::new(title.to_string(), parsed);
        let uuid = task.uuid;
        info!(
            %uuid,
            quadrant = task.quadrant.as_key(),
            count = self.tasks.len() + 1,
            "created task"
        );
        self.tasks.push(task);
        Some(uuid)
    }

    /// Replaces title and due date together; either both apply or neither.
    #[tracing::instrument(skip(self), fields(uuid = %uuid))]
    pub fn update(&mut self, uuid: Uuid, title: &str, due: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            warn!("update rejected: empty title");
            return false;
        }
        let Some(parsed) = parse_due(due) else {
            warn!(raw = due, "update rejected: invalid due date");
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.uuid == uuid) else {
            warn!("update ignored: unknown task");
            return false;
        };

        task.title = title.to_string();
        task.due = parsed;
        info!("updated task fields");
        true
    }

    #[tracing::instrument(skip(self), fields(uuid = %uuid))]
    pub fn delete(&mut self, uuid: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.uuid != uuid);
        if self.tasks.len() == before {
            warn!("delete ignored: unknown task");
            return false;
        }

        info!(remaining = self.tasks.len(), "deleted task");
        true
    }

    #[tracing::instrument(skip(self), fields(uuid = %uuid, quadrant = quadrant.as_key()))]
    pub fn reassign(&mut self, uuid: Uuid, quadrant: Quadrant) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.uuid == uuid) else {
            warn!("reassign ignored: unknown task");
            return false;
        };

        if task.quadrant == quadrant {
            debug!("reassign to current quadrant");
            return true;
        }

        let from = task.quadrant;
        task.quadrant = quadrant;
        info!(from = from.as_key(), "reassigned task");
        true
    }

    /// Tasks of one quadrant, in insertion order.
    pub fn by_quadrant(&self, quadrant: Quadrant) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.quadrant == quadrant)
    }

    pub fn get(&self, uuid: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.uuid == uuid)
    }

    pub fn contains(&self, uuid: Uuid) -> bool {
        self.get(uuid).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
