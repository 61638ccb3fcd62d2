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

/// Implements [TopicAdmin](super::stub::TopicAdmin) using the Pub/Sub v1 REST API.
#[derive(Clone, Debug)]
pub struct TopicAdmin {
    inner: ReqwestClient,
}

impl TopicAdmin {
    pub async fn new(config: ClientConfig<Credentials>) -> ClientBuilderResult<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::TopicAdmin for TopicAdmin {
    async fn get_topic(
        &self,
        req: model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Topic>> {
        let topic = required(&req.topic, "topic")?;
        let builder = self
            .inner
            .builder(reqwest::Method::GET, format!("/v1/{topic}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}

/// Implements [SubscriptionAdmin](super::stub::SubscriptionAdmin) using the
/// Pub/Sub v1 REST API.
#[derive(Clone, Debug)]
pub struct SubscriptionAdmin {
    inner: ReqwestClient,
}

impl SubscriptionAdmin {
    pub async fn new(config: ClientConfig<Credentials>) -> ClientBuilderResult<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::SubscriptionAdmin for SubscriptionAdmin {
    async fn get_subscription(
        &self,
        req: model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Subscription>> {
        let subscription = required(&req.subscription, "subscription")?;
        let builder = self
            .inner
            .builder(reqwest::Method::GET, format!("/v1/{subscription}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}

/// Implements [Subscriber](super::stub::Subscriber) using the Pub/Sub v1 REST API.
#[derive(Clone, Debug)]
pub struct Subscriber {
    inner: ReqwestClient,
}

impl Subscriber {
    pub async fn new(config: ClientConfig<Credentials>) -> ClientBuilderResult<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    async fn execute_empty<I: serde::Serialize>(
        &self,
        path: String,
        body: I,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let builder = self.inner.builder(reqwest::Method::POST, path);
        self.inner
            .execute::<_, serde_json::Value>(builder, Some(body), options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                Response::from_parts(parts, ())
            })
    }
}

impl super::stub::Subscriber for Subscriber {
    async fn pull(
        &self,
        req: model::PullRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PullResponse>> {
        let subscription = required(&req.subscription, "subscription")?;
        let builder = self
            .inner
            .builder(reqwest::Method::POST, format!("/v1/{subscription}:pull"));
        self.inner.execute(builder, Some(&req), options).await
    }

    async fn acknowledge(
        &self,
        req: model::AcknowledgeRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let subscription = required(&req.subscription, "subscription")?;
        let path = format!("/v1/{subscription}:acknowledge");
        self.execute_empty(path, &req, options).await
    }

    async fn modify_ack_deadline(
        &self,
        req: model::ModifyAckDeadlineRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let subscription = required(&req.subscription, "subscription")?;
        let path = format!("/v1/{subscription}:modifyAckDeadline");
        self.execute_empty(path, &req, options).await
    }
}
