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

//! Verify the Pub/Sub clients send the expected requests, using a local HTTP
//! server in place of the service.

mod tests {
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use inspect_pubsub::client::{SubscriptionAdmin, Subscriber, TopicAdmin};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_topic() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p/topics/dlp-notify"))
                .respond_with(json_encoded(json!({
                    "name": "projects/p/topics/dlp-notify",
                    "labels": {"env": "test"},
                }))),
        );

        let client = TopicAdmin::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        let topic = client
            .get_topic()
            .set_topic("projects/p/topics/dlp-notify")
            .send()
            .await?;
        assert_eq!(topic.name, "projects/p/topics/dlp-notify");
        assert_eq!(topic.labels.get("env").map(String::as_str), Some("test"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_topic_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p/topics/missing"))
                .respond_with(
                    status_code(404).body(
                        json!({"error": {
                            "code": 404,
                            "message": "Resource not found (resource=missing).",
                            "status": "NOT_FOUND",
                        }})
                        .to_string(),
                    ),
                ),
        );

        let client = TopicAdmin::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        let err = client
            .get_topic()
            .set_topic("projects/p/topics/missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert!(err.status().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_subscription() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/p/subscriptions/dlp-sub",
            ))
            .respond_with(json_encoded(json!({
                "name": "projects/p/subscriptions/dlp-sub",
                "topic": "projects/p/topics/dlp-notify",
                "ackDeadlineSeconds": 20,
                "pushConfig": {},
            }))),
        );

        let client = SubscriptionAdmin::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        let subscription = client
            .get_subscription()
            .set_subscription("projects/p/subscriptions/dlp-sub")
            .send()
            .await?;
        assert_eq!(subscription.topic, "projects/p/topics/dlp-notify");
        assert_eq!(subscription.ack_deadline_seconds, 20);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn subscribe_and_ack() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/subscriptions/s:pull"),
                request::body(json_decoded(eq(json!({
                    "subscription": "projects/p/subscriptions/s",
                    "maxMessages": 10,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "receivedMessages": [{
                    "ackId": "ack-1",
                    "message": {
                        "data": "aGVsbG8=",
                        "attributes": {"DlpJobName": "projects/p/dlpJobs/i-1"},
                        "messageId": "1",
                    },
                }]
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/subscriptions/s:acknowledge"),
                request::body(json_decoded(eq(json!({
                    "subscription": "projects/p/subscriptions/s",
                    "ackIds": ["ack-1"],
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Subscriber::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        let mut session = client.subscribe("projects/p/subscriptions/s").start();
        let (message, handler) = session
            .next()
            .await
            .transpose()?
            .ok_or_else(|| anyhow::anyhow!("expected a message"))?;
        assert_eq!(message.data, bytes::Bytes::from_static(b"hello"));
        assert_eq!(
            message.attributes.get("DlpJobName").map(String::as_str),
            Some("projects/p/dlpJobs/i-1")
        );
        handler.ack();
        session.close().await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn modify_ack_deadline() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/subscriptions/s:modifyAckDeadline"),
                request::body(json_decoded(eq(json!({
                    "subscription": "projects/p/subscriptions/s",
                    "ackIds": ["a", "b"],
                    "ackDeadlineSeconds": 0,
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Subscriber::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        client
            .modify_ack_deadline()
            .set_subscription("projects/p/subscriptions/s")
            .set_ack_ids(["a", "b"])
            .set_ack_deadline_seconds(0)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_subscription() -> Result<()> {
        let server = Server::run();
        let client = Subscriber::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        let err = client.pull().set_max_messages(1).send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
