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

//! Errors returned while waiting for job notifications.

use std::time::Duration;

/// The error type for [wait_for_job][crate::notification::wait_for_job].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum WaitError {
    /// No notification for the job arrived before the deadline.
    #[error("timed out after {timeout:?} waiting for a notification for job {job_name}")]
    Timeout { job_name: String, timeout: Duration },

    /// The notification channel ended before the job notification arrived.
    #[error("the notification channel closed before job {job_name} completed")]
    Closed { job_name: String },

    /// Receiving notifications failed.
    #[error("cannot receive job notifications")]
    Channel(#[source] gax::error::Error),
}

impl WaitError {
    /// The wait timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
