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

//! All messages use the proto3 JSON mapping: field names in `camelCase`,
//! bytes as base64 strings, and timestamps in RFC 3339 format.

use std::collections::HashMap;

/// A topic resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Topic {
    /// The name of the topic, in the format `projects/{project}/topics/{topic}`.
    pub name: String,

    /// See [Creating and managing labels](https://cloud.google.com/pubsub/docs/labels).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of `labels`.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A subscription resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Subscription {
    /// The name of the subscription, in the format
    /// `projects/{project}/subscriptions/{subscription}`.
    pub name: String,

    /// The name of the topic from which this subscription is receiving
    /// messages.
    pub topic: String,

    /// The approximate amount of time, in seconds, Pub/Sub waits for the
    /// subscriber to acknowledge receipt before resending the message.
    pub ack_deadline_seconds: i32,

    /// See [Creating and managing labels](https://cloud.google.com/pubsub/docs/labels).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of `topic`.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sets the value of `ack_deadline_seconds`.
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.ack_deadline_seconds = v.into();
        self
    }
}

/// A message that is published by publishers and consumed by subscribers.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PubsubMessage {
    /// The message data.
    #[serde_as(as = "serde_with::base64::Base64")]
    pub data: bytes::Bytes,

    /// Attributes for this message.
    ///
    /// DLP job notifications carry the job name in the `DlpJobName`
    /// attribute.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,

    /// ID of this message, assigned by the server when the message is
    /// published.
    pub message_id: String,

    /// The time at which the message was published, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,

    /// If non-empty, identifies related messages for which publish order
    /// should be respected.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ordering_key: String,
}

impl PubsubMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `data`.
    pub fn set_data<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }

    /// Sets the value of `attributes`.
    pub fn set_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of `message_id`.
    pub fn set_message_id<T: Into<String>>(mut self, v: T) -> Self {
        self.message_id = v.into();
        self
    }

    /// Sets the value of `ordering_key`.
    pub fn set_ordering_key<T: Into<String>>(mut self, v: T) -> Self {
        self.ordering_key = v.into();
        self
    }
}

/// A message and its corresponding acknowledgment ID.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReceivedMessage {
    /// This ID can be used to acknowledge the received message.
    pub ack_id: String,

    /// The message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<PubsubMessage>,

    /// The approximate number of times that Pub/Sub has attempted to deliver
    /// the message. Only set when the subscription has a dead letter policy.
    pub delivery_attempt: i32,
}

impl ReceivedMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `ack_id`.
    pub fn set_ack_id<T: Into<String>>(mut self, v: T) -> Self {
        self.ack_id = v.into();
        self
    }

    /// Sets the value of `message`.
    pub fn set_message<T: Into<PubsubMessage>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// Request for the `GetTopic` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetTopicRequest {
    /// The name of the topic to get, in the format
    /// `projects/{project}/topics/{topic}`.
    pub topic: String,
}

impl GetTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `topic`.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }
}

/// Request for the `GetSubscription` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetSubscriptionRequest {
    /// The name of the subscription to get, in the format
    /// `projects/{project}/subscriptions/{sub}`.
    pub subscription: String,
}

impl GetSubscriptionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `subscription`.
    pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription = v.into();
        self
    }
}

/// Request for the `Pull` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PullRequest {
    /// The subscription from which messages should be pulled.
    pub subscription: String,

    /// If true, the service returns immediately even if there are no messages
    /// available.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub return_immediately: bool,

    /// The maximum number of messages to return for this request. Must be a
    /// positive integer.
    pub max_messages: i32,
}

impl PullRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `subscription`.
    pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription = v.into();
        self
    }

    /// Sets the value of `return_immediately`.
    pub fn set_return_immediately<T: Into<bool>>(mut self, v: T) -> Self {
        self.return_immediately = v.into();
        self
    }

    /// Sets the value of `max_messages`.
    pub fn set_max_messages<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_messages = v.into();
        self
    }
}

/// Response for the `Pull` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PullResponse {
    /// Received Pub/Sub messages. May be empty if there are no messages
    /// available.
    pub received_messages: Vec<ReceivedMessage>,
}

impl PullResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `received_messages`.
    pub fn set_received_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ReceivedMessage>,
    {
        self.received_messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Request for the `Acknowledge` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AcknowledgeRequest {
    /// The subscription whose messages are being acknowledged.
    pub subscription: String,

    /// The acknowledgment IDs for the messages being acknowledged.
    pub ack_ids: Vec<String>,
}

impl AcknowledgeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `subscription`.
    pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription = v.into();
        self
    }

    /// Sets the value of `ack_ids`.
    pub fn set_ack_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ack_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Request for the `ModifyAckDeadline` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModifyAckDeadlineRequest {
    /// The name of the subscription.
    pub subscription: String,

    /// List of acknowledgment IDs.
    pub ack_ids: Vec<String>,

    /// The new ack deadline with respect to the time this request was sent
    /// to the Pub/Sub system. A value of 0 makes the message immediately
    /// available for redelivery.
    pub ack_deadline_seconds: i32,
}

impl ModifyAckDeadlineRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `subscription`.
    pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription = v.into();
        self
    }

    /// Sets the value of `ack_ids`.
    pub fn set_ack_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ack_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of `ack_deadline_seconds`.
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.ack_deadline_seconds = v.into();
        self
    }
}
