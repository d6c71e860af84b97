use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A delayed, cancellable side effect.
///
/// The action runs on the runtime after `delay` unless `cancel` is
/// called first. Dropping the handle does not cancel; whoever owns the
/// view decides when a scheduled reset is obsolete.
#[derive(Debug)]
pub struct Deferred {
    handle: JoinHandle<()>,
}

impl Deferred {
    pub fn spawn<F>(delay: Duration, action: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_action_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let _deferred = Deferred::spawn(Duration::from_millis(10), async move {
            flag.store(true, Ordering::SeqCst);
        });

        assert!(!fired.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_prevents_the_action() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let deferred = Deferred::spawn(Duration::from_millis(10), async move {
            flag.store(true, Ordering::SeqCst);
        });
        deferred.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(deferred.is_finished());
    }
}
