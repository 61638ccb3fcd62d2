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

use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by the DLP and Pub/Sub clients.
///
/// A request can fail before it is sent, for example if a resource name is
/// missing or the credentials cannot produce an authentication header. It
/// can fail in the HTTP transport, or the service can reject it with a
/// [Status].
///
/// The samples mostly print these errors. Programs that need to react to
/// specific failures use the predicates (`is_*()`) and the accessors for the
/// service status and HTTP metadata. The [source][std::error::Error::source]
/// holds the underlying error, if any.
///
/// # Example
/// ```
/// use inspect_gax::error::Error;
/// use inspect_gax::error::rpc::{Code, Status};
/// fn describe(e: &Error) -> String {
///     match e.status() {
///         Some(status) if status.code == Code::NotFound => "missing resource".into(),
///         Some(status) => format!("service error: {}", status.message),
///         None if e.is_timeout() => "timeout".into(),
///         None => format!("client error: {e}"),
///     }
/// }
/// let e = Error::service(Status::default().set_code(Code::NotFound));
/// assert_eq!(describe(&e), "missing resource");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    /// An HTTP error without a [Status] payload, or an I/O error when
    /// `response` is `None`.
    Transport { response: Option<Box<HttpResponse>> },
    Service {
        status: Box<Status>,
        response: Option<HttpMetadata>,
    },
}

#[derive(Debug)]
struct HttpResponse {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[derive(Debug)]
struct HttpMetadata {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

impl Error {
    fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    /// Creates an error from the [Status] returned by the service.
    pub fn service(status: Status) -> Self {
        Self {
            kind: ErrorKind::Service {
                status: Box::new(status),
                response: None,
            },
            source: None,
        }
    }

    /// Creates a service error, keeping the HTTP status code and headers of
    /// the response.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        Self {
            kind: ErrorKind::Service {
                status: Box::new(status),
                response: Some(HttpMetadata {
                    status_code,
                    headers,
                }),
            },
            source: None,
        }
    }

    /// Creates an error for a request that did not complete in time.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, source)
    }

    /// The request did not complete before its deadline.
    ///
    /// The deadline is enforced by the client. The service may still be
    /// processing the request.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error for a response that cannot be parsed.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, source)
    }

    /// The response payload could not be parsed.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error for a request that cannot be formatted.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, source)
    }

    /// The request could not be formatted, it was never sent.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error for a request missing the fields used in its path.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Binding, source)
    }

    /// The request is missing a resource name, or some other field used to
    /// build the request path.
    ///
    /// This is a problem in the application, for example, calling
    /// `get_dlp_job()` without setting the job name.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error for credentials that cannot produce the
    /// authentication headers.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Authentication, source)
    }

    /// The authentication headers could not be created.
    ///
    /// Typically the environment has no [Application Default Credentials].
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error from an HTTP response that does not carry a
    /// [Status].
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let response = HttpResponse {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Transport {
                response: Some(Box::new(response)),
            },
            source: None,
        }
    }

    /// Creates an error for a request that failed without an HTTP response.
    ///
    /// For example, the connection was refused or reset.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Transport { response: None }, source)
    }

    /// The request failed without receiving an HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport { response: None })
    }

    /// The problem was detected by the HTTP transport.
    ///
    /// Includes I/O errors and HTTP errors that did not come from the service,
    /// such as errors returned by proxies.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport { .. })
    }

    /// The [Status] returned by the service, if any.
    ///
    /// See [AIP-193] for a description of the error model.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service { status, .. } => Some(status.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code of the failed response, if any.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport { response } => response.as_ref().map(|r| r.status_code),
            ErrorKind::Service { response, .. } => response.as_ref()?.status_code,
            _ => None,
        }
    }

    /// The HTTP headers of the failed response, if any.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport { response } => response.as_ref().map(|r| &r.headers),
            ErrorKind::Service { response, .. } => response.as_ref()?.headers.as_ref(),
            _ => None,
        }
    }

    /// The raw payload of an HTTP error without a [Status].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport { response } => response.as_ref().map(|r| &r.payload),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match &self.kind {
            ErrorKind::Service { status, .. } => {
                return write!(
                    f,
                    "the service returned an error [{}]: {}",
                    status.code, status.message
                );
            }
            ErrorKind::Transport {
                response: Some(response),
            } => {
                let code = response.status_code;
                return match std::str::from_utf8(&response.payload) {
                    Ok(text) => write!(f, "the HTTP request failed with [{code}]: {text}"),
                    Err(_) => write!(
                        f,
                        "the HTTP request failed with [{code}]: {:?}",
                        response.payload
                    ),
                };
            }
            ErrorKind::Transport { response: None } => "the HTTP request failed",
            ErrorKind::Binding => "missing fields to build the request path",
            ErrorKind::Serialization => "cannot serialize the request",
            ErrorKind::Deserialization => "cannot deserialize the response",
            ErrorKind::Authentication => "cannot create the authentication headers",
            ErrorKind::Timeout => "the request timed out",
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => f.write_str(prefix),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}
