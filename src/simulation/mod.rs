/*!
 * Simulation Harness
 *
 * Spawns one thread per student against a single assistant, waits until
 * every visit has been served, then shuts the assistant down and reports.
 */

mod config;
mod report;
mod student;

pub use config::SimulationConfig;
pub use report::SimulationReport;

use crate::assistant::{Assistant, HelpAction};
use crate::core::errors::{AssistantError, AssistantResult};
use crate::core::limits::HARNESS_POLL_INTERVAL;
use crate::core::types::StudentId;
use crate::monitoring::{generate_run_id, span_simulation};
use std::thread;
use std::time::Instant;
use student::{run_student, StudentOutcome};
use tracing::{info, warn};

/// A configured simulation, ready to run
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> AssistantResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every student to completion with `action` as the assistant's help
    pub fn run(&self, action: impl HelpAction) -> AssistantResult<SimulationReport> {
        let run_id = generate_run_id();
        let span = span_simulation(&run_id, self.config.students, self.config.capacity);
        let _entered = span.enter();

        let started = Instant::now();
        let assistant = Assistant::with_config(self.config.assistant_config(), action)?;
        info!(
            students = self.config.students,
            visits = self.config.total_visits(),
            "Simulation started"
        );

        let outcomes = self.run_students(&assistant, &span)?;
        let rejected_attempts: u64 = outcomes.iter().map(|o| o.rejected_attempts).sum();
        let wake_ups: u64 = outcomes.iter().map(|o| o.wake_ups).sum();
        let visits: u64 = outcomes.iter().map(|o| o.visits as u64).sum();

        let drained = self.wait_until_served(&assistant, visits);
        let stats = assistant.stats();
        assistant.shutdown()?;

        if !drained {
            warn!(served = stats.served, visits, "Simulation timed out");
            return Err(AssistantError::Timeout(format!(
                "{} of {} visits served",
                stats.served, visits
            )));
        }

        let report = SimulationReport {
            run_id,
            students: self.config.students,
            capacity: self.config.capacity,
            visits,
            rejected_attempts,
            served: stats.served,
            naps: stats.naps,
            wake_ups,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            served = report.served,
            rejected = report.rejected_attempts,
            elapsed_ms = report.elapsed_ms,
            "Simulation finished"
        );
        Ok(report)
    }

    fn run_students(
        &self,
        assistant: &Assistant,
        span: &tracing::Span,
    ) -> AssistantResult<Vec<StudentOutcome>> {
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.config.students as usize);
            for student in 1..=self.config.students {
                let span = span.clone();
                let config = &self.config;
                let handle = thread::Builder::new()
                    .name(format!("student-{}", student))
                    .spawn_scoped(scope, move || {
                        span.in_scope(|| run_student(student, assistant, config))
                    })
                    .map_err(|e| AssistantError::SpawnFailed(e.to_string()))?;
                handles.push((student, handle));
            }

            handles
                .into_iter()
                .map(|(student, handle)| join_student(student, handle))
                .collect()
        })
    }

    /// Poll until the worker has taken every visit out of the waiting room
    fn wait_until_served(&self, assistant: &Assistant, visits: u64) -> bool {
        let deadline = Instant::now() + self.config.completion_timeout();
        loop {
            if assistant.stats().served >= visits {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(HARNESS_POLL_INTERVAL);
        }
    }
}

fn join_student<T>(
    student: StudentId,
    handle: thread::ScopedJoinHandle<'_, T>,
) -> AssistantResult<T> {
    handle.join().map_err(|_| {
        warn!(student, "Student thread panicked");
        AssistantError::StudentPanicked(student)
    })
}
