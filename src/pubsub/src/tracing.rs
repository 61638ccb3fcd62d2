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

/// Implements a [TopicAdmin](super::stub::TopicAdmin) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct TopicAdmin<T>
where
    T: super::stub::TopicAdmin + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> TopicAdmin<T>
where
    T: super::stub::TopicAdmin + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::TopicAdmin for TopicAdmin<T>
where
    T: super::stub::TopicAdmin + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_topic(
        &self,
        req: model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Topic>> {
        self.inner.get_topic(req, options).await
    }
}

/// Implements a [SubscriptionAdmin](super::stub::SubscriptionAdmin) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct SubscriptionAdmin<T>
where
    T: super::stub::SubscriptionAdmin + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> SubscriptionAdmin<T>
where
    T: super::stub::SubscriptionAdmin + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::SubscriptionAdmin for SubscriptionAdmin<T>
where
    T: super::stub::SubscriptionAdmin + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_subscription(
        &self,
        req: model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Subscription>> {
        self.inner.get_subscription(req, options).await
    }
}

/// Implements a [Subscriber](super::stub::Subscriber) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Subscriber<T>
where
    T: super::stub::Subscriber + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Subscriber<T>
where
    T: super::stub::Subscriber + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Subscriber for Subscriber<T>
where
    T: super::stub::Subscriber + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn pull(
        &self,
        req: model::PullRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PullResponse>> {
        self.inner.pull(req, options).await
    }


    #[tracing::instrument(ret)]
    async fn acknowledge(
        &self,
        req: model::AcknowledgeRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.inner.acknowledge(req, options).await
    }


    #[tracing::instrument(ret)]
    async fn modify_ack_deadline(
        &self,
        req: model::ModifyAckDeadlineRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.inner.modify_ack_deadline(req, options).await
    }
}
