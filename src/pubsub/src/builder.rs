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


pub mod topic_admin {
    use crate::Result;
    use crate::model;

    /// A builder for [TopicAdmin][crate::client::TopicAdmin].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use inspect_pubsub::*;
    /// # use builder::topic_admin::ClientBuilder;
    /// # use client::TopicAdmin;
    /// let builder : ClientBuilder = TopicAdmin::builder();
    /// let client = builder
    ///     .with_endpoint("https://pubsub.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        google_cloud_auth::credentials::Credentials,
    >;

    pub(crate) mod client {
        use super::super::super::client::TopicAdmin;
        use gax::client_builder::internal::ClientConfig;
        use google_cloud_auth::credentials::Credentials;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = TopicAdmin;
            type Credentials = Credentials;
            async fn build(
                self,
                config: ClientConfig<Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::TopicAdmin] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::TopicAdmin>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TopicAdmin>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [TopicAdmin::get_topic][crate::client::TopicAdmin::get_topic] calls.
    #[derive(Clone, Debug)]
    pub struct GetTopic(RequestBuilder<model::GetTopicRequest>);

    impl GetTopic {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::TopicAdmin>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetTopicRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Topic> {
            (*self.0.stub)
                .get_topic(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [topic][model::GetTopicRequest::topic].
        pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTopic {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod subscription_admin {
    use crate::Result;
    use crate::model;

    /// A builder for [SubscriptionAdmin][crate::client::SubscriptionAdmin].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use inspect_pubsub::*;
    /// # use builder::subscription_admin::ClientBuilder;
    /// # use client::SubscriptionAdmin;
    /// let builder : ClientBuilder = SubscriptionAdmin::builder();
    /// let client = builder
    ///     .with_endpoint("https://pubsub.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        google_cloud_auth::credentials::Credentials,
    >;

    pub(crate) mod client {
        use super::super::super::client::SubscriptionAdmin;
        use gax::client_builder::internal::ClientConfig;
        use google_cloud_auth::credentials::Credentials;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = SubscriptionAdmin;
            type Credentials = Credentials;
            async fn build(
                self,
                config: ClientConfig<Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::SubscriptionAdmin] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::SubscriptionAdmin>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SubscriptionAdmin>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [SubscriptionAdmin::get_subscription][crate::client::SubscriptionAdmin::get_subscription] calls.
    #[derive(Clone, Debug)]
    pub struct GetSubscription(RequestBuilder<model::GetSubscriptionRequest>);

    impl GetSubscription {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SubscriptionAdmin>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetSubscriptionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Subscription> {
            (*self.0.stub)
                .get_subscription(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [subscription][model::GetSubscriptionRequest::subscription].
        pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSubscription {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod subscriber {
    use crate::Result;
    use crate::model;

    /// A builder for [Subscriber][crate::client::Subscriber].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use inspect_pubsub::*;
    /// # use builder::subscriber::ClientBuilder;
    /// # use client::Subscriber;
    /// let builder : ClientBuilder = Subscriber::builder();
    /// let client = builder
    ///     .with_endpoint("https://pubsub.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        google_cloud_auth::credentials::Credentials,
    >;

    pub(crate) mod client {
        use super::super::super::client::Subscriber;
        use gax::client_builder::internal::ClientConfig;
        use google_cloud_auth::credentials::Credentials;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Subscriber;
            type Credentials = Credentials;
            async fn build(
                self,
                config: ClientConfig<Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Subscriber] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Subscriber>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Subscriber>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Subscriber::pull][crate::client::Subscriber::pull] calls.
    #[derive(Clone, Debug)]
    pub struct Pull(RequestBuilder<model::PullRequest>);

    impl Pull {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Subscriber>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::PullRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::PullResponse> {
            (*self.0.stub)
                .pull(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [subscription][model::PullRequest::subscription].
        pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription = v.into();
            self
        }

        /// Sets the value of [return_immediately][model::PullRequest::return_immediately].
        pub fn set_return_immediately<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.return_immediately = v.into();
            self
        }

        /// Sets the value of [max_messages][model::PullRequest::max_messages].
        pub fn set_max_messages<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_messages = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Pull {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Subscriber::acknowledge][crate::client::Subscriber::acknowledge] calls.
    #[derive(Clone, Debug)]
    pub struct Acknowledge(RequestBuilder<model::AcknowledgeRequest>);

    impl Acknowledge {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Subscriber>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::AcknowledgeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .acknowledge(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [subscription][model::AcknowledgeRequest::subscription].
        pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription = v.into();
            self
        }

        /// Sets the value of [ack_ids][model::AcknowledgeRequest::ack_ids].
        pub fn set_ack_ids<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.ack_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Acknowledge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Subscriber::modify_ack_deadline][crate::client::Subscriber::modify_ack_deadline] calls.
    #[derive(Clone, Debug)]
    pub struct ModifyAckDeadline(RequestBuilder<model::ModifyAckDeadlineRequest>);

    impl ModifyAckDeadline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Subscriber>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ModifyAckDeadlineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .modify_ack_deadline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [subscription][model::ModifyAckDeadlineRequest::subscription].
        pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription = v.into();
            self
        }

        /// Sets the value of [ack_ids][model::ModifyAckDeadlineRequest::ack_ids].
        pub fn set_ack_ids<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.ack_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [ack_deadline_seconds][model::ModifyAckDeadlineRequest::ack_deadline_seconds].
        pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.ack_deadline_seconds = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ModifyAckDeadline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
