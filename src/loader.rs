//! Deferred page delivery
//!
//! The dashboard shows a loading placeholder for a fixed interval before
//! swapping in newly paginated results. The delay is purely cosmetic: the
//! view is computed synchronously up front and only its display is held
//! back. A later request supersedes any pending one (last request wins),
//! so a stale page never overwrites a newer one.

use crate::core::ViewResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Delivers computed views after a fixed delay, superseding stale requests
#[derive(Debug, Clone)]
pub struct PageLoader {
    delay: Duration,
    latest: Arc<AtomicU64>,
}

impl PageLoader {
    /// Create a loader with the given display delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The configured display delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Hold the view for the configured delay, then deliver it
    ///
    /// Returns `None` when another `deliver` call was issued while this one
    /// was waiting; the caller should drop the stale view and keep showing
    /// the placeholder until the newest delivery resolves.
    pub async fn deliver<T>(&self, view: ViewResult<T>) -> Option<ViewResult<T>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(self.delay).await;

        if self.latest.load(Ordering::SeqCst) == ticket {
            Some(view)
        } else {
            debug!(ticket, "page delivery superseded by a newer request");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{paginate, PageRequest};

    fn view_of(records: &[u32], page: usize) -> ViewResult<u32> {
        paginate(records, PageRequest::new(page, 10).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_delivery_resolves_after_delay() {
        let loader = PageLoader::new(Duration::from_millis(300));
        let records: Vec<u32> = (0..25).collect();

        let delivered = loader.deliver(view_of(&records, 1)).await;
        let view = delivered.expect("sole request should resolve");
        assert_eq!(view.items.len(), 10);
        assert_eq!(view.page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_request_wins() {
        let loader = PageLoader::new(Duration::from_millis(300));
        let records: Vec<u32> = (0..25).collect();

        let first = loader.deliver(view_of(&records, 1));
        let second = loader.deliver(view_of(&records, 2));
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_none(), "superseded request must not deliver");
        let view = second.expect("newest request should resolve");
        assert_eq!(view.page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_deliveries_both_resolve() {
        let loader = PageLoader::new(Duration::from_millis(100));
        let records: Vec<u32> = (0..25).collect();

        let first = loader.deliver(view_of(&records, 1)).await;
        let second = loader.deliver(view_of(&records, 2)).await;
        assert!(first.is_some());
        assert!(second.is_some());
    }
}
