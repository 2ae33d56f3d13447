//! Unload station: a single FIFO line of trucks.
//!
//! The station only manages membership of its queue. The one state change
//! it ever pushes onto a truck is starting the unload for the new head.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::truck::Truck;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    id: usize,
    /// Truck ids; the head is unloading, the rest are waiting.
    queue: VecDeque<usize>,
    served: u32,
    /// Queue length sampled once per minute.
    queue_length_history: Vec<usize>,
}

impl Station {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn queue(&self) -> &VecDeque<usize> {
        &self.queue
    }

    pub fn queue_length(&self) -> usize {
        self.queue.len()
    }

    /// Trucks fully unloaded and released.
    pub fn served(&self) -> u32 {
        self.served
    }

    pub fn queue_length_history(&self) -> &[usize] {
        &self.queue_length_history
    }

    /// Append a truck to the tail of the line.
    pub fn enqueue(&mut self, truck_id: usize) {
        self.queue.push_back(truck_id);
    }

    /// Record this minute's queue length, then release the head truck if it
    /// has finished unloading and start the next one.
    ///
    /// `trucks` is indexed by truck id.
    pub fn process_queue(&mut self, trucks: &mut [Truck]) {
        self.queue_length_history.push(self.queue.len());

        let Some(&head) = self.queue.front() else {
            return;
        };
        if trucks[head].is_unloading() {
            return;
        }

        self.queue.pop_front();
        self.served += 1;

        if let Some(&next) = self.queue.front() {
            log::trace!("station {}: truck {} starts unloading", self.id, next);
            trucks[next].begin_unloading();
        }
    }

    /// Mean of the per-minute queue-length samples. None before the first minute.
    pub fn average_queue_length(&self) -> Option<f64> {
        if self.queue_length_history.is_empty() {
            return None;
        }
        let total: usize = self.queue_length_history.iter().sum();
        Some(total as f64 / self.queue_length_history.len() as f64)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station {}: {:?}", self.id, self.queue)
    }
}
