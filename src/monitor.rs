/// Periodic token refresh loop (watch mode)
///
/// Resolves immediately, then once per period, handing each outcome to the
/// consumer callbacks. Errors are reported and the loop keeps going. The loop
/// stops when its `CancellationHandle` fires: both the timer wait and an
/// in-flight resolution race the signal, and an abandoned resolution is
/// dropped without being delivered.
use crate::errors::ResolveError;
use crate::logger::{self, LogTag};
use crate::tokens::resolver::Resolve;
use crate::tokens::types::TokenRecord;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

struct CancellationState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Cooperative cancellation signal shared between a task and its owner
#[derive(Clone)]
pub struct CancellationHandle {
    state: Arc<CancellationState>,
}

impl CancellationHandle {
    pub fn new() -> Self {
        Self {
            state: Arc::new(CancellationState {
                cancelled: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        self.state.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once `cancel` has been called
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag so a concurrent cancel is not missed
            let notified = self.state.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for CancellationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A running refresh loop
pub struct RefreshTask {
    cancellation: CancellationHandle,
    handle: JoinHandle<()>,
}

impl RefreshTask {
    pub fn cancellation_handle(&self) -> CancellationHandle {
        self.cancellation.clone()
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Wait for the loop to exit (after cancellation)
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            logger::error(LogTag::Monitor, &format!("Refresh task ended abnormally: {}", e));
        }
    }

    /// Cancel and wait for the loop to exit
    pub async fn stop(self) {
        self.cancel();
        self.join().await;
    }
}

/// Spawn the refresh loop for `address`
pub fn start<R, U, E>(
    resolver: Arc<R>,
    address: String,
    period: Duration,
    on_update: U,
    on_error: E,
) -> RefreshTask
where
    R: Resolve + ?Sized + 'static,
    U: Fn(TokenRecord) + Send + Sync + 'static,
    E: Fn(ResolveError) + Send + Sync + 'static,
{
    let cancellation = CancellationHandle::new();
    let loop_cancellation = cancellation.clone();

    let handle = tokio::spawn(async move {
        run_loop(resolver, address, period, loop_cancellation, on_update, on_error).await;
    });

    RefreshTask {
        cancellation,
        handle,
    }
}

async fn run_loop<R, U, E>(
    resolver: Arc<R>,
    address: String,
    period: Duration,
    cancellation: CancellationHandle,
    on_update: U,
    on_error: E,
) where
    R: Resolve + ?Sized,
    U: Fn(TokenRecord),
    E: Fn(ResolveError),
{
    // First tick completes immediately
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u64 = 0;

    logger::debug(
        LogTag::Monitor,
        &format!("Refresh loop started for {} every {}s", address, period.as_secs()),
    );

    loop {
        tokio::select! {
            biased;
            _ = cancellation.cancelled() => break,
            _ = interval.tick() => {}
        }

        ticks += 1;
        let outcome = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                logger::debug(
                    LogTag::Monitor,
                    &format!("Abandoning tick {} for {} after cancellation", ticks, address),
                );
                break;
            }
            outcome = resolver.resolve(&address) => outcome,
        };

        match outcome {
            Ok(record) => on_update(record),
            Err(e) => {
                logger::debug(
                    LogTag::Monitor,
                    &format!("Tick {} for {} failed: {}", ticks, address, e),
                );
                on_error(e);
            }
        }
    }

    logger::debug(
        LogTag::Monitor,
        &format!("Refresh loop for {} stopped after {} ticks", address, ticks),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::types::ProviderId;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::mpsc;

    const MINT: &str = "So11111111111111111111111111111111111111112";

    fn record(price: f64) -> TokenRecord {
        TokenRecord {
            name: "Wrapped SOL".to_string(),
            symbol: "SOL".to_string(),
            address: MINT.to_string(),
            price_usd: price,
            market_cap_usd: 0.0,
            volume_24h_usd: 0.0,
            holder_count: 0,
            description: String::new(),
            website: None,
            twitter: None,
            telegram: None,
            source: ProviderId::Jupiter,
        }
    }

    /// Fails on the calls listed in `fail_on` (1-based), succeeds otherwise
    struct ScriptedResolver {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
    }

    #[async_trait]
    impl Resolve for ScriptedResolver {
        async fn resolve(&self, address: &str) -> Result<TokenRecord, ResolveError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&call) {
                Err(ResolveError::NotFound {
                    address: address.to_string(),
                })
            } else {
                Ok(record(call as f64))
            }
        }
    }

    /// Signals when a resolution starts and blocks until released
    struct GatedResolver {
        started: mpsc::UnboundedSender<()>,
        release: Notify,
    }

    #[async_trait]
    impl Resolve for GatedResolver {
        async fn resolve(&self, _address: &str) -> Result<TokenRecord, ResolveError> {
            let _ = self.started.send(());
            self.release.notified().await;
            Ok(record(1.0))
        }
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Update(f64),
        Error,
    }

    fn start_collecting<R: Resolve + 'static>(
        resolver: Arc<R>,
    ) -> (RefreshTask, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let error_tx = tx.clone();
        let task = start(
            resolver,
            MINT.to_string(),
            DEFAULT_REFRESH_INTERVAL,
            move |r| {
                let _ = tx.send(Event::Update(r.price_usd));
            },
            move |_| {
                let _ = error_tx.send(Event::Error);
            },
        );
        (task, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivers_immediately_then_every_period() {
        let resolver = Arc::new(ScriptedResolver {
            calls: AtomicUsize::new(0),
            fail_on: vec![],
        });
        let (task, mut rx) = start_collecting(resolver.clone());

        assert_eq!(rx.recv().await, Some(Event::Update(1.0)));
        assert_eq!(rx.recv().await, Some(Event::Update(2.0)));

        task.stop().await;
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_tick_does_not_stop_loop() {
        let resolver = Arc::new(ScriptedResolver {
            calls: AtomicUsize::new(0),
            fail_on: vec![1],
        });
        let (task, mut rx) = start_collecting(resolver);

        assert_eq!(rx.recv().await, Some(Event::Error));
        assert_eq!(rx.recv().await, Some(Event::Update(2.0)));

        task.stop().await;
    }

    #[tokio::test]
    async fn test_cancel_during_resolution_discards_result() {
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();
        let resolver = Arc::new(GatedResolver {
            started: started_tx,
            release: Notify::new(),
        });
        let (task, mut rx) = start_collecting(resolver.clone());

        started_rx.recv().await.unwrap();
        task.cancel();
        resolver.release.notify_one();
        task.join().await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_abandons_stuck_resolution() {
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();
        let resolver = Arc::new(GatedResolver {
            started: started_tx,
            release: Notify::new(),
        });
        let (task, mut rx) = start_collecting(resolver);

        started_rx.recv().await.unwrap();
        // The resolver is never released; stop must not wait for it
        tokio::time::timeout(Duration::from_secs(5), task.stop())
            .await
            .expect("refresh loop kept waiting on the resolver");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_timer_wait() {
        let resolver = Arc::new(ScriptedResolver {
            calls: AtomicUsize::new(0),
            fail_on: vec![],
        });
        let (task, mut rx) = start_collecting(resolver.clone());

        assert_eq!(rx.recv().await, Some(Event::Update(1.0)));
        task.stop().await;

        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_handle_cancelled_resolves_after_cancel() {
        let handle = CancellationHandle::new();
        let waiter = handle.clone();
        let join = tokio::spawn(async move { waiter.cancelled().await });

        tokio::task::yield_now().await;
        handle.cancel();
        join.await.unwrap();

        assert!(handle.is_cancelled());
    }
}
