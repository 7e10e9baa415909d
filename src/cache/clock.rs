//! Time source for cache expiry

use chrono::{DateTime, Utc};

/// Supplies the current instant to the cache.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for deterministic expiry tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<DateTime<Utc>>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::rc::Rc::new(std::cell::Cell::new(Utc::now())),
        }
    }

    pub fn advance(&self, by: std::time::Duration) {
        let step = chrono::Duration::from_std(by).unwrap();
        self.now.set(self.now.get() + step);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
