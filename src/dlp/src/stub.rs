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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;
use gax::unimplemented::unimplemented_stub;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::DlpService].
///
/// Application developers may need to implement this trait to mock
/// `client::DlpService`. In other use-cases, application developers only
/// use `client::DlpService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method.
pub trait DlpService: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::DlpService::inspect_content].
    fn inspect_content(
        &self,
        _req: model::InspectContentRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::InspectContentResponse>>> + Send
    {
        unimplemented_stub::<model::InspectContentResponse>()
    }

    /// Implements [crate::client::DlpService::create_dlp_job].
    fn create_dlp_job(
        &self,
        _req: model::CreateDlpJobRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::DlpJob>>> + Send {
        unimplemented_stub::<model::DlpJob>()
    }

    /// Implements [crate::client::DlpService::get_dlp_job].
    fn get_dlp_job(
        &self,
        _req: model::GetDlpJobRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::DlpJob>>> + Send {
        unimplemented_stub::<model::DlpJob>()
    }

    /// Implements [crate::client::DlpService::cancel_dlp_job].
    fn cancel_dlp_job(
        &self,
        _req: model::CancelDlpJobRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub::<()>()
    }
}
