//! Single-slot channel for rendering content away from where it is declared.
//!
//! A [`Source`] declares content; every mounted [`Target`] renders whatever the
//! live declaration is. The two sides live in unrelated parts of the component
//! tree and mount and unmount independently.
//!
//! Rules:
//! - At most one declaration is live. The most recently mounted source owns the
//!   slot; re-declarations from a source that lost ownership are ignored.
//! - Unmounting the owning source clears the slot. Targets then render nothing,
//!   even if an older source is still mounted.
//! - The slot is written before listeners run, and every listener receives the
//!   same value, so no target can see an older declaration than another. If a
//!   listener re-declares, the outer round is abandoned in favour of the newer
//!   one.
//!
//! Everything is single-threaded; the slot is an `Rc<RefCell<_>>` and no
//! borrow is held while listeners run, so listeners may mount or unmount.

#[cfg(test)]
#[path = "teleporter_test.rs"]
mod teleporter_test;

use std::cell::RefCell;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(Option<&T>)>;

struct Declaration<T> {
    owner: u64,
    content: T,
}

struct Slot<T> {
    live: Option<Declaration<T>>,
    /// Bumped on every write to `live`.
    version: u64,
    next_source: u64,
    next_target: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { live: None, version: 0, next_source: 0, next_target: 0, listeners: Vec::new() }
    }
}

/// Shared handle to one channel.
pub struct Teleporter<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Teleporter<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T> Default for Teleporter<T> {
    fn default() -> Self {
        Self { slot: Rc::new(RefCell::new(Slot::default())) }
    }
}

/// Build a fresh channel and return its paired source and target capabilities.
#[must_use]
pub fn create_channel<T: Clone + 'static>() -> (Source<T>, Target<T>) {
    let channel = Teleporter::new();
    (channel.source(), channel.target())
}

impl<T: Clone + 'static> Teleporter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(&self) -> Source<T> {
        Source { slot: Rc::clone(&self.slot) }
    }

    #[must_use]
    pub fn target(&self) -> Target<T> {
        Target { slot: Rc::clone(&self.slot) }
    }

    /// The live declaration, if any source owns the slot.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        current(&self.slot)
    }
}

fn current<T: Clone>(slot: &RefCell<Slot<T>>) -> Option<T> {
    slot.borrow().live.as_ref().map(|d| d.content.clone())
}

/// Write the slot, then notify every listener with the same snapshot.
///
/// A listener may publish again. That nested publish notifies everyone with
/// the newer value, so this round stops instead of handing the older snapshot
/// to the listeners it had not reached yet.
fn publish<T: Clone>(slot: &RefCell<Slot<T>>, live: Option<Declaration<T>>) {
    let (version, snapshot, listeners) = {
        let mut slot = slot.borrow_mut();
        slot.live = live;
        slot.version += 1;
        let snapshot = slot.live.as_ref().map(|d| d.content.clone());
        let listeners: Vec<Listener<T>> = slot.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
        (slot.version, snapshot, listeners)
    };
    for listener in listeners {
        if slot.borrow().version != version {
            break;
        }
        listener(snapshot.as_ref());
    }
}

/// Declaring side of a channel.
pub struct Source<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T: Clone + 'static> Source<T> {
    /// Mount with `content`, taking ownership of the slot.
    ///
    /// The declaration stays live until the returned guard is dropped or a
    /// later source mounts.
    #[must_use = "dropping the mount immediately clears the declaration"]
    pub fn mount(&self, content: T) -> SourceMount<T> {
        let id = {
            let mut slot = self.slot.borrow_mut();
            slot.next_source += 1;
            slot.next_source
        };
        tracing::trace!(source = id, "teleporter source mounted");
        publish(&self.slot, Some(Declaration { owner: id, content }));
        SourceMount { slot: Rc::clone(&self.slot), id }
    }
}

/// A mounted source. Dropping it unmounts.
pub struct SourceMount<T: Clone + 'static> {
    slot: Rc<RefCell<Slot<T>>>,
    id: u64,
}

impl<T: Clone + 'static> SourceMount<T> {
    /// Whether this mount's declaration is the one targets render.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.slot.borrow().live.as_ref().is_some_and(|d| d.owner == self.id)
    }

    /// Replace the declared content. Returns `false`, leaving the slot alone,
    /// when a newer source has taken over.
    pub fn declare(&self, content: T) -> bool {
        if !self.is_live() {
            tracing::trace!(source = self.id, "stale teleporter source ignored");
            return false;
        }
        publish(&self.slot, Some(Declaration { owner: self.id, content }));
        true
    }
}

impl<T: Clone + 'static> Drop for SourceMount<T> {
    fn drop(&mut self) {
        if self.is_live() {
            tracing::trace!(source = self.id, "teleporter source unmounted");
            publish(&self.slot, None);
        }
    }
}

/// Rendering side of a channel.
pub struct Target<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Target<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T: Clone + 'static> Target<T> {
    /// Mount a renderer. `listener` runs once with the current declaration and
    /// again after every change until the guard is dropped.
    #[must_use = "dropping the mount immediately unsubscribes"]
    pub fn mount(&self, listener: impl Fn(Option<&T>) + 'static) -> TargetMount<T> {
        let listener: Listener<T> = Rc::new(listener);
        let (id, snapshot) = {
            let mut slot = self.slot.borrow_mut();
            slot.next_target += 1;
            let id = slot.next_target;
            slot.listeners.push((id, Rc::clone(&listener)));
            (id, slot.live.as_ref().map(|d| d.content.clone()))
        };
        listener(snapshot.as_ref());
        TargetMount { slot: Rc::clone(&self.slot), id }
    }

    #[must_use]
    pub fn current(&self) -> Option<T> {
        current(&self.slot)
    }
}

/// A mounted target. Dropping it unsubscribes.
pub struct TargetMount<T> {
    slot: Rc<RefCell<Slot<T>>>,
    id: u64,
}

impl<T: Clone + 'static> TargetMount<T> {
    #[must_use]
    pub fn current(&self) -> Option<T> {
        current(&self.slot)
    }
}

impl<T> Drop for TargetMount<T> {
    fn drop(&mut self) {
        let id = self.id;
        self.slot.borrow_mut().listeners.retain(|(l, _)| *l != id);
    }
}
