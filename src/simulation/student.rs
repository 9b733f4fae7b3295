/*!
 * Student
 *
 * A student alternates between programming and asking for help. When every
 * chair is taken it comes back later; once seated it checks whether the
 * assistant sleeps and wakes it up if so.
 */

use super::config::SimulationConfig;
use crate::assistant::Assistant;
use crate::core::types::StudentId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// What one student went through during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct StudentOutcome {
    pub visits: u32,
    pub rejected_attempts: u64,
    pub wake_ups: u64,
}

pub(super) fn rng_for(student: StudentId, seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(student as u64)),
        None => StdRng::from_entropy(),
    }
}

pub(super) fn run_student(
    student: StudentId,
    assistant: &Assistant,
    config: &SimulationConfig,
) -> StudentOutcome {
    let mut rng = rng_for(student, config.seed);
    let mut outcome = StudentOutcome::default();

    for _ in 0..config.visits_per_student {
        let programming_ms = rng.gen_range(0..=config.max_programming_ms);
        debug!(student, programming_ms, "Programming");
        thread::sleep(Duration::from_millis(programming_ms));

        let help = Duration::from_millis(rng.gen_range(1..=config.max_help_ms));
        while !assistant.register_for_help(student, help) {
            outcome.rejected_attempts += 1;
            debug!(student, "No free chair, coming back later");
            thread::sleep(config.retry_delay());
        }
        outcome.visits += 1;

        if assistant.sleeping() {
            info!(student, "Waking the assistant up");
            assistant.wake_up();
            outcome.wake_ups += 1;
        }
    }

    outcome
}
