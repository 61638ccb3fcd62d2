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

use crate::builder::dlp_service as builders;
use gax::client_builder::internal::ClientConfig;
use google_cloud_auth::credentials::Credentials;
use std::sync::Arc;

/// Implements a client for the Sensitive Data Protection (DLP) API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use inspect_dlp::client::DlpService;
/// let client = DlpService::builder().build().await?;
/// let response = client
///     .inspect_content()
///     .set_parent("projects/my-project")
///     .set_item(inspect_dlp::model::ContentItem::new().set_value("My email is test@example.com"))
///     .send()
///     .await?;
/// println!("response {:?}", response);
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `DlpService` use the `with_*` methods in the type returned
/// by [builder()][DlpService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dlp.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `DlpService` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `DlpService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct DlpService {
    inner: Arc<dyn super::stub::dynamic::DlpService>,
}

impl DlpService {
    /// Returns a builder for [DlpService].
    pub fn builder() -> super::builder::dlp_service::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::dlp_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DlpService + 'static,
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
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::DlpService>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::DlpService> {
        super::transport::DlpService::new(conf).await
    }

    async fn build_with_tracing(
        conf: ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<impl super::stub::DlpService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DlpService::new)
    }

    /// Finds potentially sensitive info in content.
    ///
    /// This method has limits on input size, processing time, and output size.
    pub fn inspect_content(&self) -> builders::InspectContent {
        builders::InspectContent::new(self.inner.clone())
    }

    /// Creates a new job to inspect storage.
    ///
    /// The job runs asynchronously, use [get_dlp_job][Self::get_dlp_job] or a
    /// Pub/Sub action to learn about its completion.
    pub fn create_dlp_job(&self) -> builders::CreateDlpJob {
        builders::CreateDlpJob::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running DLP job.
    pub fn get_dlp_job(&self) -> builders::GetDlpJob {
        builders::GetDlpJob::new(self.inner.clone())
    }

    /// Starts asynchronous cancellation on a long-running DLP job.
    ///
    /// The server makes a best effort to cancel the job, but success is not
    /// guaranteed.
    pub fn cancel_dlp_job(&self) -> builders::CancelDlpJob {
        builders::CancelDlpJob::new(self.inner.clone())
    }
}

