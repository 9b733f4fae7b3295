/*!
 * Simulation Configuration
 */

use crate::assistant::AssistantConfig;
use crate::core::errors::{AssistantError, AssistantResult};
use crate::core::limits::{
    DEFAULT_COMPLETION_TIMEOUT_MS, DEFAULT_MAX_HELP_MS, DEFAULT_MAX_PROGRAMMING_MS,
    DEFAULT_RETRY_DELAY_MS, DEFAULT_STUDENTS, DEFAULT_VISITS_PER_STUDENT,
    DEFAULT_WAITING_ROOM_CAPACITY,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Settings for a run of student threads against one assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub students: u32,
    pub visits_per_student: u32,
    /// Chairs in the waiting room
    pub capacity: usize,
    pub max_programming_ms: u64,
    /// Help time is drawn from 1..=max_help_ms
    pub max_help_ms: u64,
    pub retry_delay_ms: u64,
    /// Fixed seed for reproducible runs; student `n` uses `seed + n`
    pub seed: Option<u64>,
    pub completion_timeout_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENTS,
            visits_per_student: DEFAULT_VISITS_PER_STUDENT,
            capacity: DEFAULT_WAITING_ROOM_CAPACITY,
            max_programming_ms: DEFAULT_MAX_PROGRAMMING_MS,
            max_help_ms: DEFAULT_MAX_HELP_MS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            seed: None,
            completion_timeout_ms: DEFAULT_COMPLETION_TIMEOUT_MS,
        }
    }
}

impl SimulationConfig {
    /// Short timings, handy for smoke runs and tests
    pub const fn quick() -> Self {
        Self {
            students: 4,
            visits_per_student: 2,
            capacity: 2,
            max_programming_ms: 20,
            max_help_ms: 10,
            retry_delay_ms: 5,
            seed: Some(7),
            completion_timeout_ms: 10_000,
        }
    }

    /// Load overrides from the environment
    ///
    /// Environment variables:
    /// - SIM_STUDENTS, SIM_VISITS, SIM_CAPACITY, SIM_MAX_PROGRAMMING_MS,
    ///   SIM_MAX_HELP_MS, SIM_RETRY_DELAY_MS, SIM_SEED, SIM_COMPLETION_TIMEOUT_MS
    pub fn from_env() -> AssistantResult<Self> {
        let mut config = Self::default();

        override_from_env("SIM_STUDENTS", &mut config.students)?;
        override_from_env("SIM_VISITS", &mut config.visits_per_student)?;
        override_from_env("SIM_CAPACITY", &mut config.capacity)?;
        override_from_env("SIM_MAX_PROGRAMMING_MS", &mut config.max_programming_ms)?;
        override_from_env("SIM_MAX_HELP_MS", &mut config.max_help_ms)?;
        override_from_env("SIM_RETRY_DELAY_MS", &mut config.retry_delay_ms)?;
        override_from_env("SIM_COMPLETION_TIMEOUT_MS", &mut config.completion_timeout_ms)?;
        if let Ok(raw) = std::env::var("SIM_SEED") {
            config.seed = Some(parse_var("SIM_SEED", &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> AssistantResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AssistantResult<()> {
        self.assistant_config().validate()?;
        if self.max_help_ms == 0 {
            return Err(AssistantError::Configuration(
                "max_help_ms must be at least 1".to_string(),
            ));
        }
        if self.retry_delay_ms == 0 {
            return Err(AssistantError::Configuration(
                "retry_delay_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn assistant_config(&self) -> AssistantConfig {
        AssistantConfig::with_capacity(self.capacity)
    }

    pub fn total_visits(&self) -> u64 {
        self.students as u64 * self.visits_per_student as u64
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.completion_timeout_ms)
    }
}

fn parse_var<T>(name: &str, raw: &str) -> AssistantResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AssistantError::Configuration(format!("{}={}: {}", name, raw, e)))
}

fn override_from_env<T>(name: &str, slot: &mut T) -> AssistantResult<()>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(raw) = std::env::var(name) {
        *slot = parse_var(name, &raw)?;
    }
    Ok(())
}
