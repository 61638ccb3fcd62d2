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

use gax::client_builder::internal::ClientConfig;
use google_cloud_auth::credentials::Credentials;
use std::sync::Arc;

/// Implements a client for the topic administration parts of the [Cloud Pub/Sub] API.
///
/// The inspection samples use this client to verify the notification topic
/// exists before starting a job.
///
/// # Configuration
///
/// To configure `TopicAdmin` use the `with_*` methods in the type returned
/// by [builder()][TopicAdmin::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://pubsub.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `TopicAdmin` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `TopicAdmin` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [Cloud Pub/Sub]: https://cloud.google.com/pubsub
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct TopicAdmin {
    inner: Arc<dyn super::stub::dynamic::TopicAdmin>,
}

impl TopicAdmin {
    /// Returns a builder for [TopicAdmin].
    pub fn builder() -> super::builder::topic_admin::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::topic_admin::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::TopicAdmin + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::TopicAdmin>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::TopicAdmin> {
        super::transport::TopicAdmin::new(conf).await
    }

    async fn build_with_tracing(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::TopicAdmin> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::TopicAdmin::new)
    }

    /// Gets the configuration of a topic.
    pub fn get_topic(&self) -> super::builder::topic_admin::GetTopic {
        super::builder::topic_admin::GetTopic::new(self.inner.clone())
    }
}

/// Implements a client for the subscription administration parts of the
/// [Cloud Pub/Sub] API.
///
/// # Configuration
///
/// To configure `SubscriptionAdmin` use the `with_*` methods in the type returned
/// by [builder()][SubscriptionAdmin::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://pubsub.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `SubscriptionAdmin` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `SubscriptionAdmin` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [Cloud Pub/Sub]: https://cloud.google.com/pubsub
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct SubscriptionAdmin {
    inner: Arc<dyn super::stub::dynamic::SubscriptionAdmin>,
}

impl SubscriptionAdmin {
    /// Returns a builder for [SubscriptionAdmin].
    pub fn builder() -> super::builder::subscription_admin::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::subscription_admin::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::SubscriptionAdmin + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::SubscriptionAdmin>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::SubscriptionAdmin> {
        super::transport::SubscriptionAdmin::new(conf).await
    }

    async fn build_with_tracing(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::SubscriptionAdmin> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::SubscriptionAdmin::new)
    }

    /// Gets the configuration details of a subscription.
    pub fn get_subscription(&self) -> super::builder::subscription_admin::GetSubscription {
        super::builder::subscription_admin::GetSubscription::new(self.inner.clone())
    }
}

/// A Subscriber client for the [Cloud Pub/Sub] API.
///
/// Use this client to receive messages from a [pull subscription] on a topic.
/// Most applications use [subscribe()][Subscriber::subscribe], which returns a
/// session serving one message at a time. The raw RPCs are also available.
///
/// # Configuration
///
/// To configure `Subscriber` use the `with_*` methods in the type returned
/// by [builder()][Subscriber::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://pubsub.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `Subscriber` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Subscriber` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [Cloud Pub/Sub]: https://cloud.google.com/pubsub
/// [pull subscription]: https://cloud.google.com/pubsub/docs/pull
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct Subscriber {
    inner: Arc<dyn super::stub::dynamic::Subscriber>,
}

impl Subscriber {
    /// Returns a builder for [Subscriber].
    pub fn builder() -> super::builder::subscriber::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::subscriber::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Subscriber + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::Subscriber>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::Subscriber> {
        super::transport::Subscriber::new(conf).await
    }

    async fn build_with_tracing(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::Subscriber> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Subscriber::new)
    }

    /// Pulls messages from the server.
    pub fn pull(&self) -> super::builder::subscriber::Pull {
        super::builder::subscriber::Pull::new(self.inner.clone())
    }

    /// Acknowledges the messages associated with the `ack_ids`.
    ///
    /// The Pub/Sub system can remove the relevant messages from the
    /// subscription.
    pub fn acknowledge(&self) -> super::builder::subscriber::Acknowledge {
        super::builder::subscriber::Acknowledge::new(self.inner.clone())
    }

    /// Modifies the ack deadline for specific messages.
    ///
    /// Setting the deadline to 0 makes the messages immediately available
    /// for redelivery.
    pub fn modify_ack_deadline(&self) -> super::builder::subscriber::ModifyAckDeadline {
        super::builder::subscriber::ModifyAckDeadline::new(self.inner.clone())
    }

    /// Receives messages from a subscription.
    ///
    /// The returned builder configures the session. Call `start()` to begin
    /// receiving messages.
    ///
    /// # Example
    /// ```no_run
    /// # use inspect_pubsub::client::Subscriber;
    /// # async fn sample(client: Subscriber) -> anyhow::Result<()> {
    /// let mut session = client
    ///     .subscribe("projects/my-project/subscriptions/my-subscription")
    ///     .start();
    /// while let Some((m, h)) = session.next().await.transpose()? {
    ///     println!("Received message m={m:?}");
    ///     h.ack();
    /// }
    /// # Ok(()) }
    /// ```
    pub fn subscribe<T: Into<String>>(&self, subscription: T) -> crate::subscriber::Subscribe {
        crate::subscriber::Subscribe::new(self.inner.clone(), subscription.into())
    }
}
