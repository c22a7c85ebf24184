use super::*;

#[test]
fn first_ticket_is_current() {
    let mut copies = CopyTracker::default();

    let ticket = copies.next();

    assert!(copies.is_current(ticket));
}

#[test]
fn later_copy_supersedes_earlier_clear() {
    let mut copies = CopyTracker::default();

    let first = copies.next();
    let second = copies.next();

    assert_ne!(first, second);
    assert!(!copies.is_current(first));
    assert!(copies.is_current(second));
}

#[test]
fn tickets_stay_stale() {
    let mut copies = CopyTracker::default();

    let first = copies.next();
    for _ in 0..5 {
        copies.next();
    }
    let last = copies.next();

    assert!(!copies.is_current(first));
    assert!(copies.is_current(last));
}
