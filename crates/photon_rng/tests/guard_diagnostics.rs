//! Misuse containment of the sequential-context surface.
//!
//! Installs a process-wide counting subscriber, so this file holds a single
//! test that exercises every stub path in sequence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use photon_rng::guard::{device, host, DIAGNOSTIC_TARGET};
use photon_rng::launch::{Launch, LaunchConfig};
use photon_rng::{Seed, WorkerIndex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

struct DiagnosticCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for DiagnosticCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::ERROR && meta.target() == DIAGNOSTIC_TARGET {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn stubs_log_once_return_sentinel_and_never_touch_state() {
    let counter = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(DiagnosticCounter(counter.clone()));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    // Orchestrating context calls the stub initialiser
    host::init(Seed::new(42), WorkerIndex::new(7));
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    // Legal device calls emit no diagnostics
    let config = LaunchConfig::builder().seed(42).workers(16).threads(4).build().unwrap();
    let launch = Launch::new(config).unwrap();
    let clean = launch.run(|seed, worker| {
        let mut stream = device::init(seed, worker);
        device::next(&mut stream).to_bits()
    });
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    // A worker that routes one draw through the stub gets the sentinel, one
    // diagnostic, and an unadvanced stream
    let misrouted = launch.run(|seed, worker| {
        let mut stream = device::init(seed, worker);
        let sentinel = host::next(&mut stream);
        (sentinel, device::next(&mut stream).to_bits())
    });

    assert_eq!(counter.load(Ordering::SeqCst), 1 + 16);
    for ((sentinel, bits), expected) in misrouted.iter().zip(&clean) {
        assert_eq!(sentinel.to_bits(), 0.0f64.to_bits());
        assert_eq!(bits, expected);
    }
}
