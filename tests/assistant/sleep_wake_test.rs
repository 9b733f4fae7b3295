/*!
 * Sleep / Wake Tests
 * The assistant only leaves its nap when someone explicitly wakes it
 */

use crate::support::{wait_until, HelpLog};
use std::thread;
use std::time::Duration;
use teaching_assistant::{Assistant, AssistantState};

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_fresh_assistant_falls_asleep() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();

    assert!(wait_until(TIMEOUT, || assistant.sleeping()));
    assert!(wait_until(TIMEOUT, || log.naps() == 1));
    assert_eq!(assistant.state(), AssistantState::Sleeping);
    assert_eq!(assistant.stats().naps, 1);
}

#[test]
fn test_registration_does_not_wake_the_assistant() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    assert!(assistant.register_for_help(1, Duration::ZERO));
    thread::sleep(Duration::from_millis(100));

    // Parked with company: nobody called wake_up
    assert!(assistant.sleeping());
    let stats = assistant.stats();
    assert_eq!(stats.served, 0);
    assert_eq!(stats.waiting, 1);
    assert!(log.helped().is_empty());

    assistant.wake_up();
    assert!(wait_until(TIMEOUT, || log.helped() == vec![1]));
}

#[test]
fn test_stays_asleep_after_draining_until_woken() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    assert!(assistant.register_for_help(1, Duration::from_millis(20)));
    assistant.wake_up();
    assert!(wait_until(TIMEOUT, || log.naps() == 2));

    for _ in 0..5 {
        thread::sleep(Duration::from_millis(20));
        assert!(assistant.sleeping());
    }
    assert_eq!(assistant.stats().naps, 2);

    assistant.wake_up();
    // Woken into an empty room, so straight back to sleep
    assert!(wait_until(TIMEOUT, || log.naps() == 3));
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));
}

#[test]
fn test_wake_up_while_working_is_harmless() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    assert!(assistant.register_for_help(1, Duration::from_millis(300)));
    assistant.wake_up();
    assert!(wait_until(TIMEOUT, || log.helped() == vec![1]));

    // Mid-session: already working
    for _ in 0..3 {
        assistant.wake_up();
        assert_eq!(assistant.state(), AssistantState::Working);
    }

    assert!(wait_until(TIMEOUT, || log.naps() == 2));
    assert_eq!(log.helped(), vec![1]);
    let stats = assistant.stats();
    assert_eq!(stats.naps, 2);
    assert_eq!(stats.wake_ups, 4);
}

#[test]
fn test_one_wake_up_drains_the_whole_room() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    for student in 1..=4 {
        assert!(assistant.register_for_help(student, Duration::from_millis(5)));
    }
    assistant.wake_up();

    assert!(wait_until(TIMEOUT, || log.naps() == 2));
    assert_eq!(log.helped(), vec![1, 2, 3, 4]);
    assert_eq!(assistant.stats().wake_ups, 1);
}

#[test]
fn test_register_and_wake_serves_immediately() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    assert!(assistant.register_and_wake(3, Duration::ZERO));
    assert!(wait_until(TIMEOUT, || log.helped() == vec![3]));
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));
}

#[test]
fn test_shutdown_leaves_waiting_students_unserved() {
    let log = HelpLog::new();
    let assistant = Assistant::new(log.action()).unwrap();
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    assert!(assistant.register_for_help(1, Duration::ZERO));
    assistant.shutdown().unwrap();

    assert!(log.helped().is_empty());
}
