use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle returned by [`Signal::subscribe`], used to unsubscribe.
    pub struct SubId;
}

/// Observable, single-threaded value.
///
/// Each platform flag (window focus, maximized, rem size, ...) lives in one
/// of these: the mirror callback writes it, any number of subscribers react.
/// Writes that leave the value unchanged are dropped without notifying —
/// platform sources coalesce rapid changes and only the latest value matters,
/// so duplicate deliveries must be invisible to subscribers.
///
/// Subscribers run with no borrow of the signal held, so a subscriber may
/// read the signal, write it, or (un)subscribe from inside its callback.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SlotMap<SubId, Rc<dyn Fn(&T)>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Stores `v` and notifies subscribers, unless `v` equals the current
    /// value, in which case nothing happens.
    pub fn set(&self, v: T)
    where
        T: Clone + PartialEq,
    {
        {
            let mut inner = self.0.borrow_mut();
            if inner.value == v {
                return;
            }
            inner.value = v;
        }
        self.notify();
    }

    /// Mutates in place and notifies unconditionally. For values without a
    /// usable equality, or when the caller already knows the value changed.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
        }
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.remove(id);
    }

    /// Snapshots the value and subscriber list, then invokes the callbacks
    /// with the borrow released.
    fn notify(&self)
    where
        T: Clone,
    {
        let (value, subs): (T, Vec<Rc<dyn Fn(&T)>>) = {
            let inner = self.0.borrow();
            (inner.value.clone(), inner.subs.values().cloned().collect())
        };
        for s in subs {
            s(&value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
