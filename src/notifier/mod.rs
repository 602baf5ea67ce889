//! Simulated confirmation delivery
//!
//! Each successful booking launches one background task that waits a fixed
//! delay and then "sends" the confirmation by printing it. Tasks are fire and
//! forget: the session never waits on them and nothing flows back into the
//! ledger. Completed deliveries are published on a broadcast channel so other
//! parts of the program (and tests) can observe them.

use crate::cli::OutputFormatter;
use crate::core::{Booking, BookingId};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{Notify, broadcast};

/// A confirmation that has been delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub booking_id: BookingId,
    pub email: String,
    pub ticket_count: u32,
    pub message: String,
}

impl Delivery {
    fn for_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id().clone(),
            email: booking.email().to_string(),
            ticket_count: booking.ticket_count(),
            message: format!(
                "Sending {} tickets for {} to email address {}",
                booking.ticket_count(),
                booking.full_name(),
                booking.email()
            ),
        }
    }
}

/// Count of in-flight deliveries, signalled when it drops to zero
#[derive(Default)]
struct Outstanding {
    count: AtomicUsize,
    idle: Notify,
}

/// Decrements the outstanding count even if the delivery task is aborted
struct OutstandingGuard(Arc<Outstanding>);

impl Drop for OutstandingGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// Launches confirmation deliveries on a tokio runtime
pub struct Notifier {
    runtime: Handle,
    delay: Duration,
    output: OutputFormatter,
    event_sender: broadcast::Sender<Delivery>,
    outstanding: Arc<Outstanding>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("delay", &self.delay)
            .field("outstanding", &self.outstanding())
            .field("event_sender", &"broadcast::Sender<Delivery>")
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Create a notifier spawning onto `runtime` after `delay`
    pub fn new(runtime: Handle, delay: Duration, output: OutputFormatter) -> Self {
        let (event_sender, _) = broadcast::channel(100);
        Self {
            runtime,
            delay,
            output,
            event_sender,
            outstanding: Arc::new(Outstanding::default()),
        }
    }

    /// Get a receiver for completed deliveries
    pub fn subscribe(&self) -> broadcast::Receiver<Delivery> {
        self.event_sender.subscribe()
    }

    /// Number of deliveries still waiting out their delay
    pub fn outstanding(&self) -> usize {
        self.outstanding.count.load(Ordering::Acquire)
    }

    /// Send the confirmation for `booking` in the background
    ///
    /// Returns immediately. The task reads only the snapshot taken here.
    pub fn notify(&self, booking: &Booking) {
        let delivery = Delivery::for_booking(booking);
        let delay = self.delay;
        let output = self.output.clone();
        let sender = self.event_sender.clone();

        self.outstanding.count.fetch_add(1, Ordering::AcqRel);
        let guard = OutstandingGuard(Arc::clone(&self.outstanding));

        tracing::debug!(
            "Notifier: scheduled confirmation for booking {} in {:?}",
            delivery.booking_id.short(),
            delay
        );

        self.runtime.spawn(async move {
            let _guard = guard;
            tokio::time::sleep(delay).await;

            if output.is_json() {
                let _ = output.json(&serde_json::json!({
                    "event": "confirmation_sent",
                    "delivery": &delivery,
                }));
            } else {
                let frame = "#".repeat(25);
                output.print(&format!("{frame}\n{}\n{frame}", delivery.message));
            }
            tracing::info!("Notifier: confirmation sent to {}", delivery.email);

            // No subscribers is the normal case outside of tests
            let _ = sender.send(delivery);
        });
    }

    /// Wait until every launched delivery has completed
    pub async fn drain(&self) {
        loop {
            let idle = self.outstanding.idle.notified();
            if self.outstanding() == 0 {
                return;
            }
            idle.await;
        }
    }
}
