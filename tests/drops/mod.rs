#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Shared drop counter for one or more tracked values.
#[derive(Debug, Default, Clone)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, label: &'static str) -> Tracked {
        Tracked {
            label,
            counter: self.clone(),
        }
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

/// A value that bumps its counter when dropped.
#[derive(Debug)]
pub struct Tracked {
    pub label: &'static str,
    counter: Counter,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        log::debug!("dropping tracked value {}", self.label);
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
