//! Change records and subscriber lists

use std::fmt;

/// Which value a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Level,
    Racial,
    Enhancement,
    Spell,
    Max,
    Current,
    Temp,
    Speed,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Level => "level",
            Field::Racial => "racial",
            Field::Enhancement => "enhancement",
            Field::Spell => "spell",
            Field::Max => "max",
            Field::Current => "current",
            Field::Temp => "temp",
            Field::Speed => "speed",
        };
        write!(f, "{}", s)
    }
}

/// A single value change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub field: Field,
    pub old: i64,
    pub new: i64,
}

impl Change {
    pub fn new(field: Field, old: i64, new: i64) -> Self {
        Self { field, old, new }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.old, self.new)
    }
}

/// Handle returned by [`Listeners::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered list of callbacks.
///
/// Callbacks run in subscription order.
///
/// # Examples
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tabletop::character::{Change, Field, Listeners};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut listeners: Listeners = Listeners::new();
///
/// let log = Rc::clone(&seen);
/// let id = listeners.subscribe(move |c: &Change| log.borrow_mut().push(c.new));
/// listeners.notify(&Change::new(Field::Level, 10, 12));
/// listeners.unsubscribe(id);
/// listeners.notify(&Change::new(Field::Level, 12, 14));
///
/// assert_eq!(*seen.borrow(), [12]);
/// ```
pub struct Listeners<E = Change> {
    next_id: u64,
    handles: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handles: Vec::new(),
        }
    }

    /// Add a callback to the end of the list
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.handles.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.handles.len();
        self.handles.retain(|(handle, _)| *handle != id);
        self.handles.len() != before
    }

    pub fn notify(&mut self, event: &E) {
        for (_, callback) in self.handles.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.handles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners = Listeners::new();

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            listeners.subscribe(move |_: &Change| order.borrow_mut().push(tag));
        }
        listeners.notify(&Change::new(Field::Max, 1, 2));

        assert_eq!(*order.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners: Listeners = Listeners::new();

        let counter = Rc::clone(&count);
        let id = listeners.subscribe(move |_: &Change| *counter.borrow_mut() += 1);
        listeners.notify(&Change::new(Field::Temp, 0, 1));

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert!(listeners.is_empty());

        listeners.notify(&Change::new(Field::Temp, 1, 2));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut listeners: Listeners = Listeners::new();
        let a = listeners.subscribe(|_: &Change| {});
        listeners.unsubscribe(a);
        let b = listeners.subscribe(|_: &Change| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_change_display() {
        let change = Change::new(Field::Current, 10, 7);
        assert_eq!(change.to_string(), "current: 10 -> 7");
    }
}
