//! Simulated network round trip for login and signup.
//!
//! Each screen owns a [`RequestScope`]. Starting a request hands out a
//! [`RequestTicket`] stamped with the scope's current generation; cancelling
//! the scope (or starting a newer request) bumps the generation so any
//! in-flight ticket goes stale. A stale ticket never reports completion, so
//! a dismissed screen cannot apply its mutation after the delay.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Request was cancelled before completion")]
pub struct RequestCancelled;

/// Cancellation handle shared by all requests of one screen
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    generation: Rc<Cell<u64>>,
}

impl RequestScope {
    /// Start a new request, superseding any pending one
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        RequestTicket {
            scope: self.generation.clone(),
            generation,
        }
    }

    /// Invalidate every pending request
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// A single pending request
#[derive(Debug)]
pub struct RequestTicket {
    scope: Rc<Cell<u64>>,
    generation: u64,
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.scope.get() == self.generation
    }
}

/// Wait out the simulated delay.
///
/// Returns `Err(RequestCancelled)` if the ticket went stale while waiting.
pub async fn simulate_round_trip(
    ticket: RequestTicket,
    delay: Duration,
) -> Result<(), RequestCancelled> {
    tokio::time::sleep(delay).await;
    if !ticket.is_current() {
        tracing::debug!("Simulated request cancelled, dropping result");
        return Err(RequestCancelled);
    }
    Ok(())
}

/// Wait out the simulated delay, then run `apply` if the request is still
/// current. A cancelled request never runs `apply`.
pub async fn complete_after<T>(
    ticket: RequestTicket,
    delay: Duration,
    apply: impl FnOnce() -> T,
) -> Result<T, RequestCancelled> {
    simulate_round_trip(ticket, delay).await?;
    Ok(apply())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn test_ticket_current_until_cancelled() {
        let scope = RequestScope::default();
        let ticket = scope.begin();
        assert!(ticket.is_current());

        scope.cancel();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let scope = RequestScope::default();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cloned_scope_shares_generation() {
        let scope = RequestScope::default();
        let ticket = scope.begin();
        scope.clone().cancel();
        assert!(!ticket.is_current());
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_completes_after_delay() {
        let scope = RequestScope::default();
        let start = tokio::time::Instant::now();

        let result = simulate_round_trip(scope.begin(), DELAY).await;

        assert_eq!(result, Ok(()));
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_cancelled_mid_delay() {
        let scope = RequestScope::default();
        let ticket = scope.begin();

        let canceller = scope.clone();
        let cancel = async move {
            tokio::time::sleep(DELAY / 2).await;
            canceller.cancel();
        };

        let (result, ()) = tokio::join!(simulate_round_trip(ticket, DELAY), cancel);
        assert_eq!(result, Err(RequestCancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_after_skips_apply_when_cancelled() {
        let scope = RequestScope::default();
        let applied = Cell::new(false);

        let request = complete_after(scope.begin(), DELAY, || applied.set(true));
        let cancel = async {
            tokio::time::sleep(DELAY / 2).await;
            scope.cancel();
        };

        let (result, ()) = tokio::join!(request, cancel);
        assert_eq!(result, Err(RequestCancelled));
        assert!(!applied.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_has_no_effect() {
        let scope = RequestScope::default();
        let result = simulate_round_trip(scope.begin(), DELAY).await;
        scope.cancel();
        assert_eq!(result, Ok(()));
    }
}
