/*!
 * Core Types
 * Common types shared by the waiting room and the assistant
 */

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Student identifier
pub type StudentId = u32;

/// A pending request for help
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpRequest {
    pub student: StudentId,
    /// How long the student asked to be helped
    #[serde(with = "duration_ms")]
    pub duration: Duration,
}

impl HelpRequest {
    pub fn new(student: StudentId, duration: Duration) -> Self {
        Self { student, duration }
    }

    pub fn from_millis(student: StudentId, duration_ms: u64) -> Self {
        Self::new(student, Duration::from_millis(duration_ms))
    }

    /// Message handed to the help action when this request is served.
    /// Whole seconds, truncated.
    pub fn help_message(&self) -> String {
        format!(
            "Helping student {} for {} seconds",
            self.student,
            self.duration.as_secs()
        )
    }
}

/// Serialize durations as integer milliseconds
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
