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

use super::builder::Subscribe;
use super::handler::{AckResult, AtLeastOnce, Handler};
use super::lease_loop::LeaseLoop;
use super::lease_state::LeaseOptions;
use super::leaser::DefaultLeaser;
use crate::Result;
use crate::model::{PubsubMessage, PullRequest};
use crate::stub::dynamic::Subscriber;
use gax::options::RequestOptions;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Represents an open subscribe session.
///
/// This is a stream-like struct for serving messages to an application.
///
/// # Example
/// ```no_run
/// # use inspect_pubsub::client::Subscriber;
/// # async fn sample(client: Subscriber) -> anyhow::Result<()> {
/// let mut session = client
///     .subscribe("projects/my-project/subscriptions/my-subscription")
///     .start();
/// while let Some((m, h)) = session.next().await.transpose()? {
///     println!("Received message m={m:?}");
///     h.ack();
/// }
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Session {
    /// The stub implementing this struct.
    inner: Arc<dyn Subscriber>,

    /// The request used for each pull.
    request: PullRequest,

    /// Applications ask for messages one at a time. Each pull response can
    /// contain multiple messages. We use `pool` to hold the extra messages
    /// while we wait to serve them to applications.
    ///
    /// A FIFO queue is necessary to preserve ordering.
    pool: VecDeque<(PubsubMessage, Handler)>,

    /// A sender for sending new messages into the lease management task.
    message_tx: UnboundedSender<String>,

    /// A sender for forwarding acks/nacks from the application to the lease
    /// management task. Each `Handler` holds a clone of this.
    ack_tx: UnboundedSender<AckResult>,

    /// A handle on the lease loop task.
    lease_loop: tokio::task::JoinHandle<()>,
}

impl Session {
    pub(super) fn new(builder: Subscribe) -> Self {
        let inner = builder.inner;
        let subscription = builder.subscription;

        let leaser = DefaultLeaser::new(
            inner.clone(),
            subscription.clone(),
            builder.ack_deadline_seconds,
        );
        let LeaseLoop {
            handle: lease_loop,
            message_tx,
            ack_tx,
        } = LeaseLoop::new(leaser, LeaseOptions::default());

        let request = PullRequest::new()
            .set_subscription(subscription)
            .set_max_messages(builder.max_messages);

        Self {
            inner,
            request,
            pool: VecDeque::new(),
            message_tx,
            ack_tx,
            lease_loop,
        }
    }

    /// Returns the next message received on this subscription.
    ///
    /// The message data is returned along with a [Handler] for acknowledging
    /// (ack) or rejecting (nack) the message.
    ///
    /// If a pull fails, an `Error` is returned instead. The session remains
    /// usable, calling `next()` again issues a new pull.
    ///
    /// This method waits until a message is available. Use
    /// `tokio::time::timeout` to bound the wait.
    pub async fn next(&mut self) -> Option<Result<(PubsubMessage, Handler)>> {
        loop {
            // Serve a message if we have one ready.
            if let Some(item) = self.pool.pop_front() {
                return Some(Ok(item));
            }
            // Otherwise, pull more messages.
            if let Err(e) = self.pull().await {
                return Some(Err(e));
            }
        }
    }

    async fn pull(&mut self) -> Result<()> {
        let response = self
            .inner
            .pull(self.request.clone(), RequestOptions::default())
            .await?
            .into_body();
        tracing::debug!(
            subscription = %self.request.subscription,
            count = response.received_messages.len(),
            "pulled messages"
        );
        for rm in response.received_messages {
            let Some(message) = rm.message else {
                // The client can just ignore an ack ID without an associated
                // message.
                continue;
            };
            let _ = self.message_tx.send(rm.ack_id.clone());
            self.pool.push_back((
                message,
                Handler::AtLeastOnce(AtLeastOnce {
                    ack_id: rm.ack_id,
                    ack_tx: self.ack_tx.clone(),
                }),
            ));
        }
        Ok(())
    }

    /// Closes the session, awaiting all pending acks and nacks.
    ///
    /// Messages received but not yet acknowledged, including any messages
    /// never returned by [next()][Session::next], are nacked so the service
    /// redelivers them.
    pub async fn close(self) -> Result<()> {
        // Nack the messages the application has not seen.
        for (_, handler) in self.pool {
            handler.nack();
        }
        // Signal a shutdown to the lease management background task.
        drop(self.message_tx);

        // Wait for the lease management task to complete.
        self.lease_loop.await.map_err(crate::Error::io)
    }
}
