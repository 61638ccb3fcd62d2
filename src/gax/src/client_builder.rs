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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint to use a regional DLP
//! endpoint, or use different authentication credentials. The clients use a
//! generic builder type to provide such functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// A "client" represents a connection to a specific service, e.g., the DLP
/// service or the Pub/Sub subscriber. All the clients are initialized using a
/// `ClientBuilder`, obtained from the `builder()` method on each client.
///
/// To create a client with the default configuration just invoke the
/// `.build()` method. The builder offers several methods to change the
/// configuration before calling `.build()`.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Use this to target a regional endpoint, or a local emulator.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The clients can be instrumented with the Tokio [tracing] framework.
    /// Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Without this call the clients use [Application Default Credentials].
    /// More information about valid credentials types can be found in the
    /// [google-cloud-auth] crate documentation.
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    /// [google-cloud-auth]: https://docs.rs/google-cloud-auth
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The default configuration for each client should work for most
    /// applications. Some applications may need to override the default
    /// endpoint or the default authentication credentials.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    type Config = internal::ClientConfig<Credentials>;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Credentials {
        scopes: Vec<String>,
    }

    struct Client(Config);
    impl Client {
        fn builder() -> ClientBuilder<Factory, Credentials> {
            internal::new_builder(Factory)
        }
    }

    struct Factory;
    impl internal::ClientFactory for Factory {
        type Credentials = Credentials;
        type Client = Client;
        async fn build(self, config: Config) -> Result<Self::Client> {
            Ok(Client(config))
        }
    }

    #[tokio::test]
    async fn build_default() -> anyhow::Result<()> {
        let client = Client::builder().build().await?;
        let config = client.0;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn with_options() -> anyhow::Result<()> {
        let client = Client::builder()
            .with_endpoint("http://localhost:8085")
            .with_tracing()
            .with_credentials(Credentials {
                scopes: vec!["test-scope".to_string()],
            })
            .build()
            .await?;
        let config = client.0;
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8085"));
        assert!(config.tracing);
        assert_eq!(
            config.cred.map(|c| c.scopes),
            Some(vec!["test-scope".to_string()])
        );
        Ok(())
    }

    #[test]
    fn error_credentials() {
        let error = Error::cred(std::io::Error::other("simulated"));
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn error_transport() {
        let error = Error::transport(std::io::Error::other("simulated"));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
    }
}
