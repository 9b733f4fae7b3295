/*!
 * Simulation Report
 */

use serde::{Deserialize, Serialize};

/// Summary of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: String,
    pub students: u32,
    pub capacity: usize,
    /// Successful registrations across all students
    pub visits: u64,
    /// Times a student found every chair taken
    pub rejected_attempts: u64,
    pub served: u64,
    pub naps: u64,
    /// Wake-ups issued by students
    pub wake_ups: u64,
    pub elapsed_ms: u64,
}
