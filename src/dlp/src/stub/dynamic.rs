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

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;

/// A dyn-compatible, crate-private version of [super::DlpService].
#[async_trait::async_trait]
pub trait DlpService: std::fmt::Debug + Send + Sync {
    async fn inspect_content(
        &self,
        req: model::InspectContentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::InspectContentResponse>>;

    async fn create_dlp_job(
        &self,
        req: model::CreateDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>>;

    async fn get_dlp_job(
        &self,
        req: model::GetDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>>;

    async fn cancel_dlp_job(
        &self,
        req: model::CancelDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;
}

/// All implementations of [super::DlpService] also implement [DlpService].
#[async_trait::async_trait]
impl<T: super::DlpService> DlpService for T {
    async fn inspect_content(
        &self,
        req: model::InspectContentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::InspectContentResponse>> {
        T::inspect_content(self, req, options).await
    }

    async fn create_dlp_job(
        &self,
        req: model::CreateDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>> {
        T::create_dlp_job(self, req, options).await
    }

    async fn get_dlp_job(
        &self,
        req: model::GetDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>> {
        T::get_dlp_job(self, req, options).await
    }

    async fn cancel_dlp_job(
        &self,
        req: model::CancelDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::cancel_dlp_job(self, req, options).await
    }
}
