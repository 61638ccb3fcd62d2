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

/// A dyn-compatible, crate-private version of [super::TopicAdmin].
#[async_trait::async_trait]
pub trait TopicAdmin: std::fmt::Debug + Send + Sync {
    async fn get_topic(
        &self,
        req: model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Topic>>;
}

/// All implementations of [super::TopicAdmin] also implement [TopicAdmin].
#[async_trait::async_trait]
impl<T: super::TopicAdmin> TopicAdmin for T {
    async fn get_topic(
        &self,
        req: model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Topic>> {
        T::get_topic(self, req, options).await
    }
}

/// A dyn-compatible, crate-private version of [super::SubscriptionAdmin].
#[async_trait::async_trait]
pub trait SubscriptionAdmin: std::fmt::Debug + Send + Sync {
    async fn get_subscription(
        &self,
        req: model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Subscription>>;
}

/// All implementations of [super::SubscriptionAdmin] also implement [SubscriptionAdmin].
#[async_trait::async_trait]
impl<T: super::SubscriptionAdmin> SubscriptionAdmin for T {
    async fn get_subscription(
        &self,
        req: model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Subscription>> {
        T::get_subscription(self, req, options).await
    }
}

/// A dyn-compatible, crate-private version of [super::Subscriber].
#[async_trait::async_trait]
pub trait Subscriber: std::fmt::Debug + Send + Sync {
    async fn pull(
        &self,
        req: model::PullRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PullResponse>>;


    async fn acknowledge(
        &self,
        req: model::AcknowledgeRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;


    async fn modify_ack_deadline(
        &self,
        req: model::ModifyAckDeadlineRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;
}

/// All implementations of [super::Subscriber] also implement [Subscriber].
#[async_trait::async_trait]
impl<T: super::Subscriber> Subscriber for T {
    async fn pull(
        &self,
        req: model::PullRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PullResponse>> {
        T::pull(self, req, options).await
    }


    async fn acknowledge(
        &self,
        req: model::AcknowledgeRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::acknowledge(self, req, options).await
    }


    async fn modify_ack_deadline(
        &self,
        req: model::ModifyAckDeadlineRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::modify_ack_deadline(self, req, options).await
    }
}
