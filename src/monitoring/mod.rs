/*!
 * Monitoring
 * Tracing setup and run correlation
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing, span_simulation};
