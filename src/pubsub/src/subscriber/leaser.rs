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

use crate::model::{AcknowledgeRequest, ModifyAckDeadlineRequest};
use crate::stub::dynamic::Subscriber;
use gax::options::RequestOptions;
use std::sync::Arc;

/// A trait representing leaser actions
///
/// We stub out the interface, in order to test the lease management.
#[async_trait::async_trait]
pub(crate) trait Leaser {
    /// Acknowledge a batch of messages.
    async fn ack(&self, ack_ids: Vec<String>);
    /// Negatively acknowledge a batch of messages.
    async fn nack(&self, ack_ids: Vec<String>);
    /// Extend lease deadlines for a batch of messages.
    async fn extend(&self, ack_ids: Vec<String>);
}

/// Sends acks, nacks, and lease extensions to the service.
///
/// Errors are logged and otherwise ignored. Acknowledgements are best effort,
/// a message whose ack fails is redelivered.
#[derive(Clone, Debug)]
pub(super) struct DefaultLeaser {
    inner: Arc<dyn Subscriber>,
    subscription: String,
    ack_deadline_seconds: i32,
}

impl DefaultLeaser {
    pub(super) fn new(
        inner: Arc<dyn Subscriber>,
        subscription: String,
        ack_deadline_seconds: i32,
    ) -> Self {
        Self {
            inner,
            subscription,
            ack_deadline_seconds,
        }
    }

    async fn modify_ack_deadline(&self, ack_ids: Vec<String>, seconds: i32) {
        let req = ModifyAckDeadlineRequest::new()
            .set_subscription(self.subscription.clone())
            .set_ack_ids(ack_ids)
            .set_ack_deadline_seconds(seconds);
        if let Err(e) = self
            .inner
            .modify_ack_deadline(req, RequestOptions::default())
            .await
        {
            tracing::warn!(subscription = %self.subscription, seconds, "cannot modify ack deadlines: {e}");
        }
    }
}

#[async_trait::async_trait]
impl Leaser for DefaultLeaser {
    async fn ack(&self, ack_ids: Vec<String>) {
        let req = AcknowledgeRequest::new()
            .set_subscription(self.subscription.clone())
            .set_ack_ids(ack_ids);
        if let Err(e) = self
            .inner
            .acknowledge(req, RequestOptions::default())
            .await
        {
            tracing::warn!(subscription = %self.subscription, "cannot acknowledge messages: {e}");
        }
    }

    async fn nack(&self, ack_ids: Vec<String>) {
        self.modify_ack_deadline(ack_ids, 0).await
    }

    async fn extend(&self, ack_ids: Vec<String>) {
        self.modify_ack_deadline(ack_ids, self.ack_deadline_seconds)
            .await
    }
}
