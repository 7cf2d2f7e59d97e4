use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dashviz::interaction::{RepositionHub, Subscription, TooltipReposition};

fn counter() -> (Rc<Cell<u32>>, impl Fn() + Clone + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn notify_fires_every_listener_once() {
    let hub = RepositionHub::new();
    let (first_count, first) = counter();
    let (second_count, second) = counter();

    let _a = hub.subscribe(first);
    let _b = hub.subscribe(second);
    assert_eq!(hub.listener_count(), 2);

    hub.notify();
    hub.notify();

    assert_eq!(first_count.get(), 2);
    assert_eq!(second_count.get(), 2);
}

#[test]
fn dropping_a_subscription_deregisters_it() {
    let hub = RepositionHub::new();
    let (count, on_change) = counter();

    let subscription = hub.subscribe(on_change);
    hub.notify();
    assert_eq!(count.get(), 1);

    drop(subscription);
    assert_eq!(hub.listener_count(), 0);

    hub.notify();
    assert_eq!(count.get(), 1);
}

#[test]
fn explicit_unsubscribe_matches_drop() {
    let hub = RepositionHub::new();
    let (count, on_change) = counter();

    let subscription = hub.subscribe(on_change);
    subscription.unsubscribe();

    hub.notify();
    assert_eq!(count.get(), 0);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn subscription_outliving_its_hub_drops_quietly() {
    let hub = RepositionHub::new();
    let subscription = hub.subscribe(|| {});
    drop(hub);
    drop(subscription);
}

#[test]
fn unsubscribe_during_notify_takes_effect_for_the_next_walk() {
    let hub = RepositionHub::new();
    let (count, on_change) = counter();

    let held: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    *held.borrow_mut() = Some(hub.subscribe(on_change));

    let dropper = Rc::clone(&held);
    let _killer = hub.subscribe(move || {
        dropper.borrow_mut().take();
    });

    // The counted listener fires once before the killer removes it.
    hub.notify();
    assert_eq!(count.get(), 1);
    assert_eq!(hub.listener_count(), 1);

    hub.notify();
    assert_eq!(count.get(), 1);
}

#[test]
fn subscribe_during_notify_joins_the_next_walk() {
    let hub = RepositionHub::new();
    let (count, on_change) = counter();

    let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
    let inner_hub = hub.clone();
    let store = Rc::clone(&held);
    let _spawner = hub.subscribe(move || {
        let subscription = inner_hub.subscribe(on_change.clone());
        store.borrow_mut().push(subscription);
    });

    hub.notify();
    assert_eq!(count.get(), 0);
    assert_eq!(hub.listener_count(), 2);

    hub.notify();
    assert_eq!(count.get(), 1);
}

#[test]
fn tooltip_reposition_covers_every_source() {
    let window_resize = RepositionHub::new();
    let ancestor_scroll = RepositionHub::new();
    let (count, on_reposition) = counter();

    let mut reposition = TooltipReposition::new();
    assert!(!reposition.is_active());

    reposition.activate(
        &[window_resize.clone(), ancestor_scroll.clone()],
        on_reposition,
    );
    assert!(reposition.is_active());
    assert_eq!(window_resize.listener_count(), 1);
    assert_eq!(ancestor_scroll.listener_count(), 1);

    window_resize.notify();
    ancestor_scroll.notify();
    assert_eq!(count.get(), 2);

    reposition.deactivate();
    assert!(!reposition.is_active());
    assert_eq!(window_resize.listener_count(), 0);
    assert_eq!(ancestor_scroll.listener_count(), 0);

    window_resize.notify();
    assert_eq!(count.get(), 2);
}

#[test]
fn reactivation_replaces_the_previous_registrations() {
    let old_source = RepositionHub::new();
    let new_source = RepositionHub::new();
    let (count, on_reposition) = counter();

    let mut reposition = TooltipReposition::new();
    reposition.activate(&[old_source.clone()], on_reposition.clone());
    reposition.activate(&[new_source.clone()], on_reposition);

    assert_eq!(old_source.listener_count(), 0);
    assert_eq!(new_source.listener_count(), 1);

    old_source.notify();
    assert_eq!(count.get(), 0);
    new_source.notify();
    assert_eq!(count.get(), 1);
}

#[test]
fn dropping_the_guard_releases_all_sources() {
    let source = RepositionHub::new();
    {
        let mut reposition = TooltipReposition::new();
        reposition.activate(&[source.clone()], || {});
        assert_eq!(source.listener_count(), 1);
    }
    assert_eq!(source.listener_count(), 0);
}
