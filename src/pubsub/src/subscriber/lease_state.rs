// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::leaser::Leaser;
use std::collections::HashSet;
use tokio::time::{Duration, Instant, Interval, MissedTickBehavior, interval_at};

/// Timing for the lease management task.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct LeaseOptions {
    /// How often pending acks and nacks are sent to the service.
    pub(super) flush_period: Duration,
    /// When the first flush happens.
    pub(super) flush_start: Duration,
    /// How often the leases of outstanding messages are extended.
    pub(super) extend_period: Duration,
    /// When the first extension happens.
    pub(super) extend_start: Duration,
}

impl Default for LeaseOptions {
    fn default() -> Self {
        // Extensions must happen well within the 10s minimum ack deadline.
        Self {
            flush_period: Duration::from_millis(100),
            flush_start: Duration::from_millis(100),
            extend_period: Duration::from_secs(3),
            extend_start: Duration::from_secs(3),
        }
    }
}

/// The timed actions of the lease management task.
#[derive(Debug, PartialEq)]
pub(super) enum LeaseEvent {
    Flush,
    Extend,
}

#[derive(Debug)]
pub(super) struct LeaseState<L>
where
    L: Leaser,
{
    under_lease: HashSet<String>,
    to_ack: Vec<String>,
    to_nack: Vec<String>,
    leaser: L,
    flush_interval: Interval,
    extend_interval: Interval,
}

impl<L> LeaseState<L>
where
    L: Leaser,
{
    pub(super) fn new(leaser: L, options: LeaseOptions) -> Self {
        let now = Instant::now();
        let mut flush_interval = interval_at(now + options.flush_start, options.flush_period);
        flush_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut extend_interval = interval_at(now + options.extend_start, options.extend_period);
        extend_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            under_lease: HashSet::new(),
            to_ack: Vec::new(),
            to_nack: Vec::new(),
            leaser,
            flush_interval,
            extend_interval,
        }
    }

    /// Waits for the next timed action.
    ///
    /// This is cancel safe, it can be used in a `tokio::select!`.
    pub(super) async fn next_event(&mut self) -> LeaseEvent {
        tokio::select! {
            _ = self.flush_interval.tick() => LeaseEvent::Flush,
            _ = self.extend_interval.tick() => LeaseEvent::Extend,
        }
    }

    /// Accept a new ack ID under lease management
    pub(super) fn add(&mut self, ack_id: String) {
        self.under_lease.insert(ack_id);
    }

    /// Process an ack from the application
    pub(super) fn ack(&mut self, ack_id: String) {
        self.under_lease.remove(&ack_id);
        // It does not hurt to ack a message whose lease already expired.
        self.to_ack.push(ack_id);
    }

    /// Process a nack from the application
    pub(super) fn nack(&mut self, ack_id: String) {
        // Messages not under lease need no further action.
        if self.under_lease.remove(&ack_id) {
            self.to_nack.push(ack_id);
        }
    }

    /// Flush pending acks/nacks
    pub(super) async fn flush(&mut self) {
        let to_ack = std::mem::take(&mut self.to_ack);
        let to_nack = std::mem::take(&mut self.to_nack);
        Self::send(&self.leaser, to_ack, to_nack).await;
    }

    /// Extends leases for messages under lease management
    pub(super) async fn extend(&mut self) {
        if self.under_lease.is_empty() {
            return;
        }
        let under_lease: Vec<String> = self.under_lease.iter().cloned().collect();
        self.leaser.extend(under_lease).await;
    }

    /// Shutdown the leaser
    ///
    /// This flushes all pending acks and nacks all other messages.
    pub(super) async fn shutdown(self) {
        let mut to_nack = self.to_nack;
        to_nack.extend(self.under_lease);
        Self::send(&self.leaser, self.to_ack, to_nack).await;
    }

    async fn send(leaser: &L, to_ack: Vec<String>, to_nack: Vec<String>) {
        if !to_ack.is_empty() {
            leaser.ack(to_ack).await;
        }
        if !to_nack.is_empty() {
            leaser.nack(to_nack).await;
        }
    }
}
