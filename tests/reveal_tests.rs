// Host-side tests for one-shot reveal-on-scroll.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[derive(Default)]
struct RecordingHost {
    revealed: Vec<u32>,
    observed: Vec<u32>,
    unobserved: Vec<u32>,
}

impl RevealHost for RecordingHost {
    type Target = u32;

    fn mark_revealed(&mut self, target: &u32) {
        self.revealed.push(*target);
    }

    fn observe(&mut self, target: &u32) {
        self.observed.push(*target);
    }

    fn unobserve(&mut self, target: &u32) {
        self.unobserved.push(*target);
    }
}

#[test]
fn reduced_motion_reveals_everything_without_observing() {
    let mut host = RecordingHost::default();
    let ctrl = RevealController::init(vec![1, 2, 3], true, &mut host);
    assert_eq!(ctrl.mode(), RevealMode::Immediate);
    assert_eq!(host.revealed, vec![1, 2, 3]);
    assert!(host.observed.is_empty());
    assert_eq!(ctrl.revealed_count(), 3);
    assert!(ctrl.is_revealed(&2));
}

#[test]
fn observing_mode_waits_for_intersection() {
    let mut host = RecordingHost::default();
    let ctrl = RevealController::init(vec![1, 2, 3], false, &mut host);
    assert_eq!(ctrl.mode(), RevealMode::Observing);
    assert_eq!(host.observed, vec![1, 2, 3]);
    assert!(host.revealed.is_empty());
    assert_eq!(ctrl.revealed_count(), 0);
}

#[test]
fn first_intersection_reveals_and_unobserves() {
    let mut host = RecordingHost::default();
    let mut ctrl = RevealController::init(vec![10, 20], false, &mut host);

    assert!(!ctrl.on_intersection(&20, false, &mut host));
    assert!(host.revealed.is_empty());

    assert!(ctrl.on_intersection(&20, true, &mut host));
    assert_eq!(host.revealed, vec![20]);
    assert_eq!(host.unobserved, vec![20]);
    assert!(ctrl.is_revealed(&20));
    assert!(!ctrl.is_revealed(&10));
}

#[test]
fn reveal_happens_at_most_once_per_target() {
    let mut host = RecordingHost::default();
    let mut ctrl = RevealController::init(vec![1, 2], false, &mut host);
    assert!(ctrl.on_intersection(&1, true, &mut host));
    assert!(!ctrl.on_intersection(&1, true, &mut host));
    assert!(!ctrl.on_intersection(&1, false, &mut host));
    assert_eq!(host.revealed, vec![1]);
    assert_eq!(host.unobserved, vec![1]);
}

#[test]
fn notification_order_is_whatever_host_delivers() {
    let mut host = RecordingHost::default();
    let mut ctrl = RevealController::init(vec![1, 2, 3], false, &mut host);
    for t in [3, 1, 2] {
        ctrl.on_intersection(&t, true, &mut host);
    }
    assert_eq!(host.revealed, vec![3, 1, 2]);
    assert_eq!(ctrl.revealed_count(), 3);
}

#[test]
fn unknown_target_is_ignored() {
    let mut host = RecordingHost::default();
    let mut ctrl = RevealController::init(vec![1], false, &mut host);
    assert!(!ctrl.on_intersection(&99, true, &mut host));
    assert!(host.revealed.is_empty());
    assert!(host.unobserved.is_empty());
}

#[test]
fn empty_target_set_is_fine() {
    let mut host = RecordingHost::default();
    let ctrl = RevealController::<u32>::init(Vec::new(), false, &mut host);
    assert!(ctrl.is_empty());
    assert_eq!(ctrl.len(), 0);
}
