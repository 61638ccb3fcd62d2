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

use super::handler::AckResult;
use super::lease_state::{LeaseEvent, LeaseOptions, LeaseState};
use super::leaser::Leaser;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

/// The background task managing the leases of a session.
///
/// The session sends the ack id of each pulled message on `message_tx`, and
/// the handlers send the application decisions on `ack_tx`. Dropping
/// `message_tx` shuts down the task, after it flushes any pending acks and
/// nacks.
pub(super) struct LeaseLoop {
    pub(super) handle: JoinHandle<()>,
    pub(super) message_tx: UnboundedSender<String>,
    pub(super) ack_tx: UnboundedSender<AckResult>,
}

impl LeaseLoop {
    pub(super) fn new<L>(leaser: L, options: LeaseOptions) -> Self
    where
        L: Leaser + Send + Sync + 'static,
    {
        let (message_tx, message_rx) = unbounded_channel();
        let (ack_tx, ack_rx) = unbounded_channel();
        let state = LeaseState::new(leaser, options);
        let handle = tokio::spawn(run(state, message_rx, ack_rx));
        LeaseLoop {
            handle,
            message_tx,
            ack_tx,
        }
    }
}

async fn run<L>(
    mut state: LeaseState<L>,
    mut message_rx: UnboundedReceiver<String>,
    mut ack_rx: UnboundedReceiver<AckResult>,
) where
    L: Leaser + Send + Sync + 'static,
{
    loop {
        // New messages go under lease before any ack is applied, an ack for a
        // message not yet under lease would leave it leased forever.
        tokio::select! {
            biased;
            event = state.next_event() => match event {
                LeaseEvent::Flush => state.flush().await,
                LeaseEvent::Extend => state.extend().await,
            },
            message = message_rx.recv() => match message {
                Some(ack_id) => state.add(ack_id),
                None => {
                    while let Ok(result) = ack_rx.try_recv() {
                        apply(&mut state, result);
                    }
                    state.shutdown().await;
                    break;
                }
            },
            result = ack_rx.recv() => match result {
                Some(result) => apply(&mut state, result),
                None => break,
            },
        }
    }
    tracing::debug!("lease loop finished");
}

fn apply<L>(state: &mut LeaseState<L>, result: AckResult)
where
    L: Leaser + Send + Sync + 'static,
{
    match result {
        AckResult::Ack(ack_id) => state.ack(ack_id),
        AckResult::Nack(ack_id) => state.nack(ack_id),
    }
}
