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

//! Samples for the Sensitive Data Protection (DLP) inspection APIs.
//!
//! The samples inspect a string or a local file directly, and run inspection
//! jobs over Cloud Storage files, BigQuery tables, and Datastore kinds. Jobs
//! publish a notification to a Pub/Sub topic when they complete. The samples
//! wait for that notification on an existing subscription before fetching
//! the job results.

pub mod args;
pub mod error;
pub mod inspect;
pub mod jobs;
pub mod logging;
pub mod notification;
pub mod output;

pub use inspect::InspectSettings;
pub use jobs::{JobSettings, StorageSource};
