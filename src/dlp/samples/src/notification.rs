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

//! Receive the notifications published by inspection jobs.
//!
//! Inspection jobs publish a message to a Pub/Sub topic when they complete.
//! The message carries the job name in the `DlpJobName` attribute. Several
//! jobs may share a topic, so the samples wait for the message matching
//! their job and reject any others.

use crate::error::WaitError;
use pubsub::client::{SubscriptionAdmin, Subscriber, TopicAdmin};
use pubsub::model::PubsubMessage;
use pubsub::subscriber::handler::Handler;
use pubsub::subscriber::session::Session;
use std::time::Duration;

/// The message attribute holding the name of the completed job.
pub const JOB_NAME_ATTRIBUTE: &str = "DlpJobName";

/// Acknowledges or rejects a notification.
pub trait AckHandler {
    /// The notification was consumed, it should not be redelivered.
    fn ack(self);

    /// The notification was not for this application, it should be
    /// redelivered.
    fn nack(self);
}

impl AckHandler for Handler {
    fn ack(self) {
        Handler::ack(self)
    }

    fn nack(self) {
        Handler::nack(self)
    }
}

/// A stream of job notifications.
///
/// [Session] is the implementation used by the samples.
pub trait JobNotifications: Send {
    type Handler: AckHandler + Send;

    /// Returns the next notification, or `None` if the stream is closed.
    fn next(
        &mut self,
    ) -> impl std::future::Future<Output = Option<gax::Result<(PubsubMessage, Self::Handler)>>> + Send;
}

impl JobNotifications for Session {
    type Handler = Handler;

    async fn next(&mut self) -> Option<gax::Result<(PubsubMessage, Handler)>> {
        Session::next(self).await
    }
}

/// Verifies the notification topic and starts receiving messages from
/// `subscription_id`.
///
/// Both the topic and subscription must already exist in `project_id`.
pub async fn open_notifications(
    topic_admin: &TopicAdmin,
    subscription_admin: &SubscriptionAdmin,
    subscriber: &Subscriber,
    project_id: &str,
    topic_id: &str,
    subscription_id: &str,
) -> gax::Result<Session> {
    let topic = topic_admin
        .get_topic()
        .set_topic(format!("projects/{project_id}/topics/{topic_id}"))
        .send()
        .await?;
    let subscription = subscription_admin
        .get_subscription()
        .set_subscription(format!(
            "projects/{project_id}/subscriptions/{subscription_id}"
        ))
        .send()
        .await?;
    if subscription.topic != topic.name {
        tracing::warn!(
            subscription = %subscription.name,
            topic = %topic.name,
            "the subscription is not attached to the notification topic"
        );
    }
    tracing::info!(subscription = %subscription.name, "listening for job notifications");
    Ok(subscriber
        .subscribe(subscription.name)
        .set_ack_deadline_seconds(subscription.ack_deadline_seconds)
        .start())
}

/// Returns true if `message` signals the completion of `job_name`.
pub fn is_job_notification(message: &PubsubMessage, job_name: &str) -> bool {
    message
        .attributes
        .get(JOB_NAME_ATTRIBUTE)
        .is_some_and(|name| name == job_name)
}

/// Waits for the notification of `job_name`.
///
/// The matching notification is acknowledged. Any other notification,
/// including messages without attributes, is rejected and the wait
/// continues.
///
/// Returns an error if receiving fails, if the stream closes, or if no
/// matching notification arrives within `timeout`.
pub async fn wait_for_job<N>(
    notifications: &mut N,
    job_name: &str,
    timeout: Duration,
) -> Result<(), WaitError>
where
    N: JobNotifications,
{
    match tokio::time::timeout(timeout, listen(notifications, job_name)).await {
        Ok(result) => result,
        Err(_) => Err(WaitError::Timeout {
            job_name: job_name.to_string(),
            timeout,
        }),
    }
}

async fn listen<N>(notifications: &mut N, job_name: &str) -> Result<(), WaitError>
where
    N: JobNotifications,
{
    while let Some(item) = notifications.next().await {
        let (message, handler) = item.map_err(WaitError::Channel)?;
        if is_job_notification(&message, job_name) {
            tracing::info!(job_name, message_id = %message.message_id, "received job notification");
            handler.ack();
            return Ok(());
        }
        tracing::debug!(
            job_name,
            message_id = %message.message_id,
            "rejecting notification for a different job"
        );
        handler.nack();
    }
    Err(WaitError::Closed {
        job_name: job_name.to_string(),
    })
}
