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

//! The HTTP+JSON transport shared by the DLP and Pub/Sub clients.
//!
//! Both services expose REST APIs. The request builders in each client crate
//! format the request path and body, and then call [ReqwestClient::execute]
//! to authenticate, send the request, and decode the response.

use crate::Result;
use crate::client_builder::Error as BuilderError;
use crate::client_builder::internal::ClientConfig;
use crate::error::Error;
use crate::response::{Parts, Response};
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;

/// Marker type for requests without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig<Credentials>,
        default_endpoint: &str,
    ) -> crate::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            tracing: config.tracing,
        })
    }

    /// The endpoint used by this client, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: crate::options::RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                )
                .body(payload);
        }
        let auth_headers = match self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?
        {
            CacheableResource::New { data, .. } => data,
            // The client never sends an entity tag, so the headers are never cached.
            CacheableResource::NotModified => {
                return Err(Error::authentication("credentials returned no headers"));
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }

        let request = builder.build().map_err(Error::ser)?;
        if self.tracing {
            tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        }
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if self.tracing {
            tracing::debug!(status = %response.status(), "received response");
        }
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }

    async fn make_credentials(
        config: &ClientConfig<Credentials>,
    ) -> crate::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        google_cloud_auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match crate::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body, serde_json fails on empty input.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let body = match body {
        content if content.is_empty() && no_content_status => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(Response::from_parts(Parts::new().set_headers(headers), body))
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue};
    use serde_json::Value;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(http_resp.into())
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let response =
            resp_from_code_content(reqwest::StatusCode::BAD_REQUEST, r#"{"error": "bad"}"#)?;
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad"}"#)).as_ref()
        );
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        use crate::error::rpc::Code;
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "Requested entity was not found.",
            "status": "NOT_FOUND",
        }});
        let response = resp_from_code_content(reqwest::StatusCode::NOT_FOUND, &body.to_string())?;
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Requested entity was not found.");
        assert_eq!(err.http_status_code(), Some(404));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response::<Value>(response).await?;
        let body = response.into_body();
        assert!(
            body == Value::Null || body == serde_json::json!({}),
            "{body:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_empty_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "")?;
        let response = super::to_http_response::<Value>(response).await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }
}
