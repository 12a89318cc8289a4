use crate::domain::{EventCollection, SampleEvent};

/// Keeps the first `capacity` events pushed and counts all of them.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    items: Vec<SampleEvent>,
    capacity: usize,
    total: u64,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Count the event and store it if there is room. Returns whether it was
    /// stored.
    pub fn push(&mut self, event: SampleEvent) -> bool {
        self.total += 1;
        if self.items.len() < self.capacity {
            self.items.push(event);
            true
        } else {
            false
        }
    }

    /// Count an event that is known not to fit, without building it.
    pub fn count_overflow(&mut self) {
        debug_assert!(self.is_full());
        self.total += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn to_collection(&self) -> EventCollection {
        EventCollection {
            items: self.items.clone(),
            total_count: self.total,
            truncated: self.total > self.capacity as u64,
        }
    }
}
