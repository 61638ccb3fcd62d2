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
use gax::client_builder::Result as ClientBuilderResult;
use gax::client_builder::internal::ClientConfig;
use gax::http::{NoBody, ReqwestClient};
use gax::options::RequestOptions;
use gax::path_parameter::required;
use gax::response::Response;
use google_cloud_auth::credentials::Credentials;

/// Implements [DlpService](super::stub::DlpService) using the DLP v2 REST API.
#[derive(Clone, Debug)]
pub struct DlpService {
    inner: ReqwestClient,
}

impl DlpService {
    pub async fn new(config: ClientConfig<Credentials>) -> ClientBuilderResult<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DlpService for DlpService {
    async fn inspect_content(
        &self,
        req: model::InspectContentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::InspectContentResponse>> {
        let parent = required(&req.parent, "parent")?;
        let builder = self.inner.builder(
            reqwest::Method::POST,
            format!("/v2/{parent}/content:inspect"),
        );
        self.inner.execute(builder, Some(&req), options).await
    }

    async fn create_dlp_job(
        &self,
        req: model::CreateDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>> {
        let parent = required(&req.parent, "parent")?;
        let builder = self
            .inner
            .builder(reqwest::Method::POST, format!("/v2/{parent}/dlpJobs"));
        self.inner.execute(builder, Some(&req), options).await
    }

    async fn get_dlp_job(
        &self,
        req: model::GetDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DlpJob>> {
        let name = required(&req.name, "name")?;
        let builder = self
            .inner
            .builder(reqwest::Method::GET, format!("/v2/{name}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn cancel_dlp_job(
        &self,
        req: model::CancelDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let name = required(&req.name, "name")?;
        let builder = self
            .inner
            .builder(reqwest::Method::POST, format!("/v2/{name}:cancel"));
        self.inner
            .execute::<_, serde_json::Value>(builder, Some(&req), options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                Response::from_parts(parts, ())
            })
    }
}
