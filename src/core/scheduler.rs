use std::collections::HashMap;
use std::hash::Hash;
use tokio::task::AbortHandle;

/// Registry of at most one pending task per key
///
/// Each registration gets a generation number. A task that fires must call
/// [`KeyedTasks::complete`] with its generation and only act if that returns
/// true, so a task cancelled or replaced while it was waking up does nothing.
#[derive(Debug)]
pub struct KeyedTasks<K> {
    pending: HashMap<K, PendingTask>,
    next_generation: u64,
}

#[derive(Debug)]
struct PendingTask {
    generation: u64,
    handle: Option<AbortHandle>,
}

impl<K: Eq + Hash + Clone> KeyedTasks<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            next_generation: 0,
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Reserve a slot for `key`, aborting whatever was there
    ///
    /// Returns the generation the task must present on completion. Attach the
    /// spawned task's handle with [`KeyedTasks::attach`].
    pub fn reserve(&mut self, key: K) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        if let Some(previous) = self.pending.insert(key, PendingTask { generation, handle: None }) {
            previous.abort();
        }
        generation
    }

    pub fn attach(&mut self, key: &K, generation: u64, handle: AbortHandle) {
        match self.pending.get_mut(key) {
            Some(task) if task.generation == generation => task.handle = Some(handle),
            // Slot was already released; the task must not outlive it
            _ => handle.abort(),
        }
    }

    /// Release the slot from inside the firing task
    pub fn complete(&mut self, key: &K, generation: u64) -> bool {
        match self.pending.get(key) {
            Some(task) if task.generation == generation => {
                self.pending.remove(key);
                true
            }
            _ => false,
        }
    }

    /// Abort the pending task for `key`, if any
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.pending.remove(key) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl<K: Eq + Hash + Clone> Default for KeyedTasks<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for KeyedTasks<K> {
    fn drop(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl PendingTask {
    fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
