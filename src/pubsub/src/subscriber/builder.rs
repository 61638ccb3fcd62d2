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

use super::session::Session;
use crate::stub::dynamic::Subscriber;
use std::sync::Arc;

/// Builder for the [Subscriber::subscribe][crate::client::Subscriber::subscribe] method.
#[derive(Clone, Debug)]
pub struct Subscribe {
    pub(crate) inner: Arc<dyn Subscriber>,
    pub(crate) subscription: String,
    pub(crate) max_messages: i32,
    pub(crate) ack_deadline_seconds: i32,
}

impl Subscribe {
    pub(crate) fn new(inner: Arc<dyn Subscriber>, subscription: String) -> Self {
        Self {
            inner,
            subscription,
            max_messages: 10,
            ack_deadline_seconds: 10,
        }
    }

    /// Sets the maximum number of messages requested in each pull.
    ///
    /// Values smaller than 1 are treated as 1. The default value is 10
    /// messages.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use inspect_pubsub::client::Subscriber;
    /// # async fn sample(client: Subscriber) -> anyhow::Result<()> {
    /// let session = client.subscribe("projects/my-project/subscriptions/my-subscription")
    ///     .set_max_messages(100)
    ///     .start();
    /// # Ok(()) }
    /// ```
    pub fn set_max_messages<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_messages = v.into().max(1);
        self
    }

    /// Sets the ack deadline used when extending leases.
    ///
    /// This value represents how long the application has to ack or nack an
    /// incoming message. The session extends the leases of messages it holds
    /// until the application handles them.
    ///
    /// The minimum deadline you can specify is 10 seconds. The maximum deadline
    /// you can specify is 600 seconds (10 minutes).
    ///
    /// The default value is 10 seconds.
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.ack_deadline_seconds = v.into().clamp(10, 600);
        self
    }

    /// Starts the session.
    ///
    /// This starts a background task to manage leases, it must be called from
    /// within a tokio runtime.
    pub fn start(self) -> Session {
        Session::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::super::leaser::tests::MockSubscriber;
    use super::*;
    use test_case::test_case;

    const SUBSCRIPTION: &str = "projects/my-project/subscriptions/my-subscription";

    fn test_builder() -> Subscribe {
        Subscribe::new(Arc::new(MockSubscriber::new()), SUBSCRIPTION.to_string())
    }

    #[test]
    fn reasonable_defaults() {
        let builder = test_builder();
        assert_eq!(builder.subscription, SUBSCRIPTION);
        assert_eq!(builder.ack_deadline_seconds, 10);
        assert!(
            1000 > builder.max_messages && builder.max_messages > 0,
            "max_messages={}",
            builder.max_messages
        );
    }

    #[test]
    fn options() {
        let builder = test_builder()
            .set_max_messages(123)
            .set_ack_deadline_seconds(20);
        assert_eq!(builder.max_messages, 123);
        assert_eq!(builder.ack_deadline_seconds, 20);
    }

    #[test_case(0, 1)]
    #[test_case(-5, 1)]
    #[test_case(42, 42)]
    fn max_messages_is_positive(input: i32, want: i32) {
        let builder = test_builder().set_max_messages(input);
        assert_eq!(builder.max_messages, want);
    }

    #[test_case(0, 10)]
    #[test_case(30, 30)]
    #[test_case(3600, 600)]
    fn ack_deadline_range(input: i32, want: i32) {
        let builder = test_builder().set_ack_deadline_seconds(input);
        assert_eq!(builder.ack_deadline_seconds, want);
    }
}
