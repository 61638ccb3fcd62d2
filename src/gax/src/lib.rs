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

//! Client helpers.
//!
//! This crate contains the types and functions shared by the Sensitive Data
//! Protection (DLP) and Pub/Sub clients used in the inspection samples: the
//! error type, per-request options, the response wrapper, the generic client
//! builder, and the authenticated HTTP transport.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Validates the fields used to build the request path.
///
/// Path parameters are always required. The clients validate them before
/// sending any request, so a missing resource name is reported as a binding
/// error instead of a confusing `404` from the service.
pub mod path_parameter;

/// The core error types used by the clients.
pub mod error;

/// Per-request options and the trait implemented by all request builders.
pub mod options;

/// The response type for all RPCs.
pub mod response;

/// Types to configure and construct clients.
pub mod client_builder;

/// The authenticated HTTP transport shared by all clients.
pub mod http;

/// The default implementation for stub trait methods.
#[doc(hidden)]
pub mod unimplemented;
