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

//! Client for the [Sensitive Data Protection] (DLP) v2 API.
//!
//! This crate contains the types and functions used by the inspection
//! samples: inspect content inline, and create, fetch and cancel inspection
//! jobs over Cloud Storage, Datastore and BigQuery.
//!
//! The entry point is [client::DlpService]. Applications can mock the client
//! by implementing [stub::DlpService] and using
//! [DlpService::from_stub][client::DlpService::from_stub].
//!
//! [Sensitive Data Protection]: https://cloud.google.com/sensitive-data-protection

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Traits to mock the clients in this library.
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

pub(crate) mod tracing;

pub(crate) mod transport;

const DEFAULT_HOST: &str = "https://dlp.googleapis.com";
