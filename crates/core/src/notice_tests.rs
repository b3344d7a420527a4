// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::time::FakeClock;

#[test]
fn notice_visible_until_duration_elapses() {
    let clock = FakeClock::new(1_000);
    let mut notifier = Notifier::new(clock.clone());
    notifier.show("Prompt built.");

    assert_eq!(notifier.current().unwrap().message, "Prompt built.");
    clock.advance_ms(2_199);
    assert!(notifier.current().is_some());
    clock.advance_ms(1);
    assert!(notifier.current().is_none());
    assert_eq!(notifier.last().unwrap().to_string(), "Prompt built.");
}

#[test]
fn new_notice_replaces_and_restarts_timer() {
    let clock = FakeClock::at_epoch();
    let mut notifier = Notifier::with_duration(clock.clone(), Duration::from_millis(100));
    notifier.show("first");
    clock.advance_ms(90);
    notifier.show("second");
    clock.advance_ms(90);

    let current = notifier.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.expires_at_ms(), 190);
}

#[test]
fn clear_removes_notice() {
    let mut notifier = Notifier::new(FakeClock::at_epoch());
    notifier.show("x");
    notifier.clear();
    assert!(notifier.last().is_none());
}
