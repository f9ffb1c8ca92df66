//! Tests for the bounded sink registry.

use fanlog::{MAX_SINKS, SinkRegistry, StreamHandle};
use std::cell::RefCell;
use std::rc::Rc;

fn buffer() -> (Rc<RefCell<Vec<u8>>>, StreamHandle) {
    let buf = Rc::new(RefCell::new(Vec::new()));
    let handle: StreamHandle = buf.clone();
    (buf, handle)
}

#[test]
fn add_and_count() {
    let mut registry = SinkRegistry::new();
    assert!(registry.is_empty());

    let (_, a) = buffer();
    let (_, b) = buffer();
    assert!(registry.add(a, false));
    assert!(registry.add(b, false));
    assert_eq!(registry.len(), 2);
}

#[test]
fn duplicate_add_is_noop_success() {
    let mut registry = SinkRegistry::new();
    let (_, handle) = buffer();

    assert!(registry.add(handle.clone(), false));
    assert!(registry.add(handle, false));
    assert_eq!(registry.len(), 1);
}

#[test]
fn capacity_bound_rejects_without_mutation() {
    let mut registry = SinkRegistry::new();
    let handles: Vec<StreamHandle> = (0..MAX_SINKS).map(|_| buffer().1).collect();
    for handle in &handles {
        assert!(registry.add(handle.clone(), false));
    }
    assert_eq!(registry.len(), MAX_SINKS);

    let (_, extra) = buffer();
    assert!(!registry.add(extra, false));
    assert_eq!(registry.len(), MAX_SINKS);

    // Re-adding an existing handle at capacity is still a success.
    assert!(registry.add(handles[0].clone(), false));
    assert_eq!(registry.len(), MAX_SINKS);
}

#[test]
fn remove_compacts_and_preserves_order() {
    let mut registry = SinkRegistry::new();
    let (_, a) = buffer();
    let (_, b) = buffer();
    let (_, c) = buffer();
    registry.add(a.clone(), false);
    registry.add(b.clone(), false);
    registry.add(c.clone(), false);

    registry.remove(&b);

    assert_eq!(registry.len(), 2);
    assert!(Rc::ptr_eq(registry.get(0).unwrap().stream(), &a));
    assert!(Rc::ptr_eq(registry.get(1).unwrap().stream(), &c));
}

#[test]
fn remove_unknown_is_noop() {
    let mut registry = SinkRegistry::new();
    let (_, a) = buffer();
    let (_, stranger) = buffer();
    registry.add(a, false);

    registry.remove(&stranger);
    assert_eq!(registry.len(), 1);
}

#[test]
fn colors_forced_off_for_non_terminal() {
    let mut registry = SinkRegistry::new();
    let (_, handle) = buffer();

    assert!(registry.add(handle, true));
    assert!(!registry.get(0).unwrap().colors());
}

#[test]
fn iteration_follows_insertion_order() {
    let mut registry = SinkRegistry::new();
    let (_, a) = buffer();
    let (_, b) = buffer();
    registry.add(a.clone(), false);
    registry.add(b.clone(), false);

    let order: Vec<bool> = registry
        .iter()
        .map(|sink| Rc::ptr_eq(sink.stream(), &a))
        .collect();
    assert_eq!(order, vec![true, false]);
}
