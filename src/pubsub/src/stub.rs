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

/// Defines the trait used to implement [crate::client::TopicAdmin].
///
/// Application developers may need to implement this trait to mock
/// `client::TopicAdmin`. In other use-cases, application developers only
/// use `client::TopicAdmin` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method.
pub trait TopicAdmin: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::TopicAdmin::get_topic].
    fn get_topic(
        &self,
        _req: model::GetTopicRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::Topic>>> + Send {
        unimplemented_stub::<model::Topic>()
    }
}

/// Defines the trait used to implement [crate::client::SubscriptionAdmin].
///
/// Application developers may need to implement this trait to mock
/// `client::SubscriptionAdmin`. In other use-cases, application developers only
/// use `client::SubscriptionAdmin` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method.
pub trait SubscriptionAdmin: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::SubscriptionAdmin::get_subscription].
    fn get_subscription(
        &self,
        _req: model::GetSubscriptionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::Subscription>>> + Send {
        unimplemented_stub::<model::Subscription>()
    }
}

/// Defines the trait used to implement [crate::client::Subscriber].
///
/// Application developers may need to implement this trait to mock
/// `client::Subscriber`. In other use-cases, application developers only
/// use `client::Subscriber` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method.
pub trait Subscriber: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Subscriber::pull].
    fn pull(
        &self,
        _req: model::PullRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::PullResponse>>> + Send {
        unimplemented_stub::<model::PullResponse>()
    }

    /// Implements [crate::client::Subscriber::acknowledge].
    fn acknowledge(
        &self,
        _req: model::AcknowledgeRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Subscriber::modify_ack_deadline].
    fn modify_ack_deadline(
        &self,
        _req: model::ModifyAckDeadlineRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub::<()>()
    }
}
