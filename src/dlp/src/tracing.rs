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

/// Implements a [DlpService](super::stub::DlpService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DlpService<T>
where
    T: super::stub::DlpService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DlpService<T>
where
    T: super::stub::DlpService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DlpService for DlpService<T>
where
    T: super::stub::DlpService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn inspect_content(
        &self,
        req: model::InspectContentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::InspectContentResponse>> {
        self.inner.inspect_content(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_dlp_job(
        &self,
        req: model::CreateDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>> {
        self.inner.create_dlp_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_dlp_job(
        &self,
        req: model::GetDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>> {
        self.inner.get_dlp_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_dlp_job(
        &self,
        req: model::CancelDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.inner.cancel_dlp_job(req, options).await
    }
}
