//! The simulated step runner.
//!
//! A panel's trigger is "disabled" while its `BusyFlag` is held. The guard is
//! released on drop, so the flag clears whether the step succeeds, fails, or
//! the request future is dropped mid-delay.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::errors::AppError;

/// Shared busy marker for one panel's generate / analyze trigger.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// True when both handles belong to the same panel instance.
    pub fn same_as(&self, other: &BusyFlag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Takes the flag, or returns `None` if a step is already outstanding.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }
}

#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs `step` after the simulated delay while holding `flag`.
///
/// Returns `AppError::Conflict` without waiting if the flag is already held.
pub async fn run_simulated<T, F, Fut>(
    flag: &BusyFlag,
    delay: Duration,
    label: &str,
    step: F,
) -> Result<T, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let _guard = flag.try_acquire().ok_or_else(|| {
        warn!("{label} rejected: a previous request is still pending");
        AppError::Conflict(format!("{label} is already in progress"))
    })?;

    info!("{label} started (simulated delay {}ms)", delay.as_millis());
    tokio::time::sleep(delay).await;

    let result = step().await;
    match &result {
        Ok(_) => info!("{label} finished"),
        Err(e) => warn!("{label} failed: {e}"),
    }
    result
}
