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

//! These tests use a local HTTP server to verify the transport sends
//! authenticated requests to the configured endpoint, and maps the responses
//! and errors as expected.

mod tests {
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use inspect_gax::client_builder::internal::ClientConfig;
    use inspect_gax::error::rpc::Code;
    use inspect_gax::http::{NoBody, ReqwestClient};
    use inspect_gax::options::RequestOptions;
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    fn test_config() -> ClientConfig<google_cloud_auth::credentials::Credentials> {
        let mut config = ClientConfig::default();
        config.cred = Some(Anonymous::new().build());
        config
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn post_with_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/projects/p/content:inspect"),
                request::body(json_decoded(eq(json!({"item": {"value": "hello"}})))),
            ])
            .respond_with(json_encoded(json!({"result": {}}))),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(
            reqwest::Method::POST,
            "/v2/projects/p/content:inspect".into(),
        );
        let response = client
            .execute::<Value, Value>(
                builder,
                Some(json!({"item": {"value": "hello"}})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.body(), &json!({"result": {}}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p/topics/t"),
                request::headers(contains(("user-agent", "test-agent/1.0"))),
            ])
            .respond_with(json_encoded(json!({"name": "projects/p/topics/t"}))),
        );
        let endpoint = format!("http://{}/", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        assert!(!client.endpoint().ends_with('/'), "{}", client.endpoint());
        let builder = client.builder(reqwest::Method::GET, "/v1/projects/p/topics/t".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.0");
        let response = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        assert_eq!(response.body()["name"], json!("projects/p/topics/t"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/projects/p/dlpJobs/j")).respond_with(
                status_code(404)
                    .append_header("content-type", "application/json")
                    .body(
                        json!({"error": {
                            "code": 404,
                            "message": "Job not found",
                            "status": "NOT_FOUND"
                        }})
                        .to_string(),
                    ),
            ),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/v2/projects/p/dlpJobs/j".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::NotFound, "{err:?}");
        assert_eq!(status.message, "Job not found");
        assert_eq!(err.http_status_code(), Some(404));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/unknown"))
                .respond_with(status_code(502).body("bad gateway")),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/unknown".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"bad gateway"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow")).respond_with(
                delay_and_then(Duration::from_secs(5), json_encoded(json!({}))),
            ),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .execute::<NoBody, Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        // Nothing listens on the discard port on the loopback interface.
        let client = ReqwestClient::new(test_config(), "http://127.0.0.1:9").await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/anything".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }
}
