/*!
 * Help Action
 *
 * The side-effecting callback the assistant runs for every served student
 * and every time it goes to sleep. Always invoked from the worker thread,
 * never concurrently with itself, and never while the assistant's lock is
 * held, so an action may query the `Assistant` it belongs to.
 *
 * A panicking action is fatal to the worker.
 */

use tracing::info;

/// Externally injected help behavior
#[cfg_attr(test, mockall::automock)]
pub trait HelpAction: Send + 'static {
    fn help(&self, message: &str);
}

impl<F> HelpAction for F
where
    F: Fn(&str) + Send + 'static,
{
    fn help(&self, message: &str) {
        self(message)
    }
}

/// Logs every message through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHelpAction;

impl HelpAction for TracingHelpAction {
    fn help(&self, message: &str) {
        info!(target: "assistant::help", "{}", message);
    }
}

/// Prints every message on its own line, like a console session
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutHelpAction;

impl HelpAction for StdoutHelpAction {
    fn help(&self, message: &str) {
        println!("{}", message);
    }
}
