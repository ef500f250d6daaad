//! In-memory task list
//!
//! Tasks live only for the lifetime of the running component. Every
//! operation here is total: blank text and unknown ids are ignored rather
//! than reported.

use chrono::Utc;

/// Task identifier, the creation timestamp in milliseconds
pub type TaskId = i64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Ordered list of tasks, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: Option<TaskId>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task built from `text`.
    ///
    /// Returns the new id, or `None` when `text` is empty after trimming.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id(Utc::now().timestamp_millis());
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip `completed` on the task with `id`. Returns false if no such task.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`. Returns false if no such task.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Task at display position `index`
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    // Clock ticks are milliseconds, so two adds in the same tick (or a clock
    // stepping backwards) would collide without the bump.
    fn next_id(&mut self, now_millis: TaskId) -> TaskId {
        let id = match self.last_id {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_id = Some(id);
        id
    }
}
