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

//! Pub/Sub client for the inspection samples.
//!
//! This crate contains the types and functions needed to receive the
//! notifications published by DLP inspection jobs: resolving topics and
//! subscriptions, pulling messages, and acknowledging or rejecting them.
//!
//! The [Subscriber][client::Subscriber] client offers both the raw `pull`,
//! `acknowledge`, and `modifyAckDeadline` RPCs, and a
//! [Session][subscriber::session::Session] that serves messages one at a time
//! while a background task manages their leases.

pub use gax::Result;
pub use gax::error::Error;

/// The messages exchanged with the Pub/Sub v1 REST API.
pub mod model;

pub mod stub;

/// Clients to interact with Pub/Sub.
pub mod client;

/// Request builders.
pub mod builder;

/// Types to receive messages from a subscription.
pub mod subscriber;

pub(crate) mod tracing;

pub(crate) mod transport;

const DEFAULT_HOST: &str = "https://pubsub.googleapis.com";
