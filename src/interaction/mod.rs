//! Reposition triggers for tooltips.
//!
//! External resize/scroll sources are modeled as [`RepositionHub`]s; a
//! tooltip subscribes while active and the registration is released on
//! every exit path through [`Subscription`]'s drop guard.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Callback)>,
    /// Ids unsubscribed while a notify walk had the listeners checked out.
    dead: Vec<u64>,
}

/// A source of reposition triggers (window resize, ancestor scroll).
///
/// Subscribers receive no payload: the tooltip re-measures on its own.
/// Single-threaded; the registry lives behind `Rc<RefCell<_>>`.
#[derive(Clone, Default)]
pub struct RepositionHub {
    inner: Rc<RefCell<HubInner>>,
}

impl RepositionHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; dropping the returned [`Subscription`]
    /// (or calling `unsubscribe`) deregisters it.
    pub fn subscribe(&self, on_change: impl FnMut() + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(on_change)));

        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Fires every registered listener once.
    ///
    /// Listeners may subscribe or unsubscribe re-entrantly: the walk runs on
    /// a checked-out snapshot and reconciles removals afterwards.
    pub fn notify(&self) {
        let mut walked = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for (_, callback) in &mut walked {
            callback();
        }

        let mut inner = self.inner.borrow_mut();
        let dead = std::mem::take(&mut inner.dead);
        walked.retain(|(id, _)| !dead.contains(id));

        // Listeners added during the walk are already in `inner.listeners`.
        walked.append(&mut inner.listeners);
        inner.listeners = walked;
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Scoped registration on a [`RepositionHub`].
#[derive(Debug)]
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Subscription {
    /// Explicit release; equivalent to dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };

        let mut inner = hub.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != self.id);
        if inner.listeners.len() == before {
            // Checked out by a notify walk; reconcile there.
            inner.dead.push(self.id);
        }
    }
}

/// Keeps a tooltip's reposition listeners alive while the tooltip is active:
/// one subscription per source (window resize plus each scrollable ancestor
/// of the anchor). Deactivation or drop releases all of them.
#[derive(Default)]
pub struct TooltipReposition {
    subscriptions: Vec<Subscription>,
}

impl TooltipReposition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `on_reposition` to every source, replacing any previous
    /// activation.
    pub fn activate(&mut self, sources: &[RepositionHub], on_reposition: impl Fn() + Clone + 'static) {
        self.deactivate();
        self.subscriptions = sources
            .iter()
            .map(|source| {
                let callback = on_reposition.clone();
                source.subscribe(move || callback())
            })
            .collect();
    }

    pub fn deactivate(&mut self) {
        self.subscriptions.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.subscriptions.is_empty()
    }
}
