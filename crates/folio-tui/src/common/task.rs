use std::collections::HashMap;

use folio_core::services::ContentSource;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Lifecycle of one loader task (mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    /// Latest requested task; older completions are dropped.
    pub requested: Option<TaskId>,
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.requested.is_some() || self.active.is_some()
    }

    pub fn on_requested(&mut self, id: TaskId) {
        self.requested = Some(id);
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        if self.requested != Some(started.id) {
            return;
        }
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.requested == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    pub fn clear(&mut self) {
        self.requested = None;
        self.active = None;
        self.cancel = None;
    }
}

/// Loader tasks, one slot per content source.
#[derive(Debug, Default, Clone)]
pub struct Tasks {
    loads: HashMap<ContentSource, TaskState>,
}

impl Tasks {
    pub fn state(&self, source: ContentSource) -> Option<&TaskState> {
        self.loads.get(&source)
    }

    pub fn state_mut(&mut self, source: ContentSource) -> &mut TaskState {
        self.loads.entry(source).or_default()
    }

    pub fn is_running(&self, source: ContentSource) -> bool {
        self.state(source).is_some_and(TaskState::is_running)
    }

    pub fn is_any_running(&self) -> bool {
        self.loads.values().any(TaskState::is_running)
    }
}
