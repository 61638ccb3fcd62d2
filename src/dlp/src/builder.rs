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

pub mod dlp_service {
    use crate::Result;
    use crate::model;

    /// A builder for [DlpService][crate::client::DlpService].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use inspect_dlp::*;
    /// # use builder::dlp_service::ClientBuilder;
    /// # use client::DlpService;
    /// let builder : ClientBuilder = DlpService::builder();
    /// let client = builder
    ///     .with_endpoint("https://dlp.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        google_cloud_auth::credentials::Credentials,
    >;

    pub(crate) mod client {
        use super::super::super::client::DlpService;
        use gax::client_builder::internal::ClientConfig;
        use google_cloud_auth::credentials::Credentials;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DlpService;
            type Credentials = Credentials;
            async fn build(
                self,
                config: ClientConfig<Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DlpService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DlpService::inspect_content][crate::client::DlpService::inspect_content] calls.
    #[derive(Clone, Debug)]
    pub struct InspectContent(RequestBuilder<model::InspectContentRequest>);

    impl InspectContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::InspectContentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::InspectContentResponse> {
            (*self.0.stub)
                .inspect_content(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][model::InspectContentRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [inspect_config][model::InspectContentRequest::inspect_config].
        pub fn set_inspect_config<T: Into<model::InspectConfig>>(mut self, v: T) -> Self {
            self.0.request.inspect_config = Some(v.into());
            self
        }

        /// Sets the value of [item][model::InspectContentRequest::item].
        pub fn set_item<T: Into<model::ContentItem>>(mut self, v: T) -> Self {
            self.0.request.item = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InspectContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::create_dlp_job][crate::client::DlpService::create_dlp_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDlpJob(RequestBuilder<model::CreateDlpJobRequest>);

    impl CreateDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CreateDlpJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::DlpJob> {
            (*self.0.stub)
                .create_dlp_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][model::CreateDlpJobRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [inspect_job][model::CreateDlpJobRequest::inspect_job].
        pub fn set_inspect_job<T: Into<model::InspectJobConfig>>(mut self, v: T) -> Self {
            self.0.request.inspect_job = Some(v.into());
            self
        }

        /// Sets the value of [job_id][model::CreateDlpJobRequest::job_id].
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::get_dlp_job][crate::client::DlpService::get_dlp_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetDlpJob(RequestBuilder<model::GetDlpJobRequest>);

    impl GetDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetDlpJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::DlpJob> {
            (*self.0.stub)
                .get_dlp_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][model::GetDlpJobRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::cancel_dlp_job][crate::client::DlpService::cancel_dlp_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelDlpJob(RequestBuilder<model::CancelDlpJobRequest>);

    impl CancelDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CancelDlpJobRequest>>(mut self, v: V) -> Self {
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
                .cancel_dlp_job(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][model::CancelDlpJobRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
