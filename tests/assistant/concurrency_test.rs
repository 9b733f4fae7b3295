/*!
 * Concurrency Tests
 * Many student threads against one assistant: no loss, no duplication
 */

use crate::support::{wait_until, HelpLog};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;
use teaching_assistant::{Assistant, AssistantConfig};

const TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn test_concurrent_registrations_within_capacity_all_succeed() {
    const STUDENTS: u32 = 16;

    let log = HelpLog::new();
    let assistant = Arc::new(
        Assistant::with_config(AssistantConfig::with_capacity(STUDENTS as usize), log.action())
            .unwrap(),
    );
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    let barrier = Arc::new(Barrier::new(STUDENTS as usize));
    let handles: Vec<_> = (1..=STUDENTS)
        .map(|student| {
            let assistant = assistant.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                assistant.register_for_help(student, Duration::ZERO)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap(), "registration within capacity failed");
    }

    assistant.wake_up();
    assert!(wait_until(TIMEOUT, || assistant.stats().served == STUDENTS as u64));
    assert!(wait_until(TIMEOUT, || assistant.sleeping()));

    let mut helped = log.helped();
    helped.sort_unstable();
    assert_eq!(helped, (1..=STUDENTS).collect::<Vec<_>>());
}

#[test]
fn test_retrying_students_are_each_served_exactly_once() {
    const STUDENTS: u32 = 8;
    const VISITS: u32 = 5;

    let log = HelpLog::new();
    let assistant = Arc::new(
        Assistant::with_config(AssistantConfig::with_capacity(2), log.action()).unwrap(),
    );

    let handles: Vec<_> = (1..=STUDENTS)
        .map(|student| {
            let assistant = assistant.clone();
            thread::spawn(move || {
                let mut turned_away = 0u32;
                for visit in 0..VISITS {
                    let id = student * 100 + visit;
                    while !assistant.register_for_help(id, Duration::from_millis(1)) {
                        turned_away += 1;
                        thread::sleep(Duration::from_millis(1));
                    }
                    if assistant.sleeping() {
                        assistant.wake_up();
                    }
                }
                turned_away
            })
        })
        .collect();

    let turned_away: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();

    let total = (STUDENTS * VISITS) as u64;
    assert!(wait_until(TIMEOUT, || assistant.stats().served == total));

    let stats = assistant.stats();
    assert_eq!(stats.accepted, total);
    assert_eq!(stats.rejected, turned_away as u64);

    let mut helped = log.helped();
    assert!(wait_until(TIMEOUT, || {
        helped = log.helped();
        helped.len() == total as usize
    }));
    helped.sort_unstable();
    let mut expected: Vec<u32> = (1..=STUDENTS)
        .flat_map(|s| (0..VISITS).map(move |v| s * 100 + v))
        .collect();
    expected.sort_unstable();
    assert_eq!(helped, expected);
}

#[test]
fn test_each_student_is_served_in_its_own_registration_order() {
    const STUDENTS: u32 = 4;
    const VISITS: u32 = 6;

    let log = HelpLog::new();
    let assistant = Arc::new(
        Assistant::with_config(AssistantConfig::with_capacity(3), log.action()).unwrap(),
    );

    let handles: Vec<_> = (1..=STUDENTS)
        .map(|student| {
            let assistant = assistant.clone();
            thread::spawn(move || {
                for visit in 0..VISITS {
                    while !assistant.register_and_wake(student * 100 + visit, Duration::ZERO) {
                        thread::yield_now();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let total = (STUDENTS * VISITS) as usize;
    assert!(wait_until(TIMEOUT, || log.helped().len() == total));

    let helped = log.helped();
    for student in 1..=STUDENTS {
        let visits: Vec<u32> = helped
            .iter()
            .filter(|id| **id / 100 == student)
            .map(|id| id % 100)
            .collect();
        assert_eq!(visits, (0..VISITS).collect::<Vec<_>>());
    }
}
