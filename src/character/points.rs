//! Pools such as hit points and magic points

use std::fmt;

use super::{Change, Field, ListenerId, Listeners};

/// A pool with a maximum, a current value and temporary extra points
#[derive(Debug)]
pub struct Points {
    max: i64,
    current: i64,
    temp: i64,
    listeners: Listeners,
}

impl Points {
    /// Full pool of `max` points
    pub fn new(max: i64) -> Self {
        Self {
            max,
            current: max,
            temp: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn temp(&self) -> i64 {
        self.temp
    }

    /// Current plus temporary points
    pub fn value(&self) -> i64 {
        self.current + self.temp
    }

    pub fn set_max(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.max, value);
        self.emit(Field::Max, old, value)
    }

    pub fn set_current(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.current, value);
        self.emit(Field::Current, old, value)
    }

    pub fn set_temp(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.temp, value);
        self.emit(Field::Temp, old, value)
    }

    /// Raise the maximum, raising current by the same amount.
    ///
    /// Listeners see the max change then the current change; the max change
    /// is returned.
    pub fn add_max(&mut self, amount: i64) -> Change {
        let (old_max, old_current) = (self.max, self.current);
        self.max += amount;
        self.current += amount;
        let change = self.emit(Field::Max, old_max, self.max);
        self.emit(Field::Current, old_current, self.current);
        change
    }

    /// Adjust current, capped at max.
    ///
    /// Returns `None` (and notifies nobody) when the value does not move.
    ///
    /// # Examples
    /// ```
    /// use tabletop::character::Points;
    ///
    /// let mut hp = Points::new(10);
    /// assert!(hp.add_current(5).is_none());
    /// assert_eq!(hp.add_current(-4).unwrap().new, 6);
    /// assert_eq!(hp.add_current(100).unwrap().new, 10);
    /// ```
    pub fn add_current(&mut self, amount: i64) -> Option<Change> {
        let value = (self.current + amount).min(self.max);
        if value == self.current {
            return None;
        }
        let old = std::mem::replace(&mut self.current, value);
        Some(self.emit(Field::Current, old, value))
    }

    pub fn add_temp(&mut self, amount: i64) -> Change {
        self.set_temp(self.temp + amount)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Change) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn emit(&mut self, field: Field, old: i64, new: i64) -> Change {
        let change = Change::new(field, old, new);
        self.listeners.notify(&change);
        change
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value(), self.max)
    }
}
