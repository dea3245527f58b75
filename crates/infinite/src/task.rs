//! Running a prompt alongside the background task that drives it.

use crate::error::InfError;
use crate::startup::StartUp;
use infinite_core::ProgramError;
use infinite_widgets::Prompt;
use std::future::Future;

/// Spawn `work`, drive `run` until its prompt finishes and return the
/// task's output.
///
/// `run` is usually [`Program::run`](infinite_core::Program::run). `on_done`
/// runs as soon as the task completes, panicked or not, and is expected to
/// finish the prompt. A cancelled prompt aborts the task and yields
/// `Ok(None)`. A panicked task yields [`InfError::Task`].
pub(crate) async fn run_with_task<P, R, Fut, T>(
    run: R,
    work: Fut,
    on_done: impl FnOnce() + Send + 'static,
) -> Result<Option<T>, InfError>
where
    P: Prompt<Output = ()>,
    R: Future<Output = Result<StartUp<P>, ProgramError>>,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let work = tokio::spawn(work);
    let abort = work.abort_handle();
    let watcher = tokio::spawn(async move {
        let result = work.await;
        on_done();
        result
    });

    let mut startup = match run.await {
        Ok(startup) => startup,
        Err(err) => {
            abort.abort();
            return Err(err.into());
        }
    };

    match startup.outcome() {
        Some(()) => Ok(Some(watcher.await??)),
        None => {
            tracing::debug!("prompt cancelled, aborting task");
            abort.abort();
            Ok(None)
        }
    }
}
