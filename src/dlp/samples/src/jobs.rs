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

//! Run inspection jobs over Cloud Storage, BigQuery, and Datastore.

use crate::error::WaitError;
use crate::inspect::InspectSettings;
use crate::notification::{JobNotifications, wait_for_job};
use dlp::client::DlpService;
use dlp::model::{
    Action, BigQueryOptions, BigQueryTable, CloudStorageOptions, CreateDlpJobRequest,
    DatastoreOptions, DlpJob, FileSet, InspectJobConfig, KindExpression, PartitionId,
    PublishToPubSub, StorageConfig,
};
use std::time::Duration;

/// The default time to wait for a job notification.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// The default delay between the job notification and fetching the job.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// The storage inspected by a job.
#[derive(Clone, Debug, PartialEq)]
pub enum StorageSource {
    /// A file, or a set of files matching a wildcard, in a Cloud Storage
    /// bucket.
    CloudStorage { bucket: String, file: String },
    /// A BigQuery table.
    BigQuery {
        project_id: String,
        dataset_id: String,
        table_id: String,
    },
    /// A Datastore kind. An empty `namespace_id` is the default namespace.
    Datastore {
        project_id: String,
        namespace_id: String,
        kind: String,
    },
}

impl StorageSource {
    /// The name of the sample operation for this kind of storage.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::CloudStorage { .. } => "inspectGCSFile",
            Self::BigQuery { .. } => "inspectBigquery",
            Self::Datastore { .. } => "inspectDatastore",
        }
    }
}

/// Returns the `gs://` url for an object.
pub fn gcs_url(bucket: &str, file: &str) -> String {
    format!("gs://{bucket}/{file}")
}

impl From<StorageSource> for StorageConfig {
    fn from(value: StorageSource) -> Self {
        match value {
            StorageSource::CloudStorage { bucket, file } => StorageConfig::new()
                .set_cloud_storage_options(
                    CloudStorageOptions::new()
                        .set_file_set(FileSet::new().set_url(gcs_url(&bucket, &file))),
                ),
            StorageSource::BigQuery {
                project_id,
                dataset_id,
                table_id,
            } => StorageConfig::new().set_big_query_options(
                BigQueryOptions::new().set_table_reference(
                    BigQueryTable::new()
                        .set_project_id(project_id)
                        .set_dataset_id(dataset_id)
                        .set_table_id(table_id),
                ),
            ),
            StorageSource::Datastore {
                project_id,
                namespace_id,
                kind,
            } => StorageConfig::new().set_datastore_options(
                DatastoreOptions::new()
                    .set_partition_id(
                        PartitionId::new()
                            .set_project_id(project_id)
                            .set_namespace_id(namespace_id),
                    )
                    .set_kind(KindExpression::new().set_name(kind)),
            ),
        }
    }
}

/// The options for inspection jobs.
#[derive(Clone, Debug, PartialEq)]
pub struct JobSettings {
    pub inspect: InspectSettings,
    /// The topic receiving the job notification, in the calling project.
    pub topic_id: String,
    /// The subscription used to receive the job notification.
    pub subscription_id: String,
    /// How long to wait for the job notification.
    pub wait_timeout: Duration,
    /// How long to wait after the notification before fetching the job.
    pub settle_delay: Duration,
}

impl JobSettings {
    pub fn new<T, S>(inspect: InspectSettings, topic_id: T, subscription_id: S) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            inspect,
            topic_id: topic_id.into(),
            subscription_id: subscription_id.into(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// The full name of the notification topic.
    pub fn topic_name(&self) -> String {
        format!(
            "projects/{}/topics/{}",
            self.inspect.calling_project_id, self.topic_id
        )
    }
}

/// Builds the request to create an inspection job for `source`.
///
/// The job publishes a notification to the settings topic when it
/// completes.
pub fn create_job_request(settings: &JobSettings, source: StorageSource) -> CreateDlpJobRequest {
    let job = InspectJobConfig::new()
        .set_storage_config(source)
        .set_inspect_config(settings.inspect.inspect_config())
        .set_actions([Action::new()
            .set_pub_sub(PublishToPubSub::new().set_topic(settings.topic_name()))]);
    CreateDlpJobRequest::new()
        .set_parent(settings.inspect.parent())
        .set_inspect_job(job)
}

/// Runs an inspection job and prints its results.
///
/// Creates the job, waits for its completion notification, and then fetches
/// the job to report the findings. If the notification does not arrive in
/// time the job is cancelled.
pub async fn run_inspect_job<N>(
    client: &DlpService,
    notifications: &mut N,
    settings: &JobSettings,
    source: StorageSource,
) -> anyhow::Result<DlpJob>
where
    N: JobNotifications,
{
    let job = client
        .create_dlp_job()
        .with_request(create_job_request(settings, source))
        .send()
        .await?;
    tracing::info!(job_name = %job.name, "created inspection job");

    match wait_for_job(notifications, &job.name, settings.wait_timeout).await {
        Ok(()) => {}
        Err(e @ WaitError::Timeout { .. }) => {
            cancel_job(client, &job.name).await;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }

    tokio::time::sleep(settings.settle_delay).await;
    let job = client.get_dlp_job().set_name(&job.name).send().await?;
    print!("{}", crate::output::job_report(&job));
    Ok(job)
}

async fn cancel_job(client: &DlpService, job_name: &str) {
    match client.cancel_dlp_job().set_name(job_name).send().await {
        Ok(()) => tracing::info!(job_name, "cancelled inspection job"),
        Err(e) => tracing::warn!(job_name, "cannot cancel inspection job: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::tests::MockDlpService;
    use crate::notification::tests::{FakeNotifications, job_message};
    use dlp::model::{InfoType, InspectConfig, JobState};
    use gax::response::Response;
    use test_case::test_case;

    const JOB: &str = "projects/calling/dlpJobs/i-123";

    fn settings() -> JobSettings {
        let inspect = InspectSettings {
            data_project_id: "data".into(),
            ..InspectSettings::new("calling")
        };
        JobSettings::new(inspect, "my-topic", "my-subscription")
    }

    #[test]
    fn storage_url() {
        assert_eq!(gcs_url("my-bucket", "my-file.txt"), "gs://my-bucket/my-file.txt");
        assert_eq!(gcs_url("my-bucket", "logs/*.txt"), "gs://my-bucket/logs/*.txt");
    }

    #[test]
    fn cloud_storage_config() {
        let source = StorageSource::CloudStorage {
            bucket: "my-bucket".into(),
            file: "my-file.txt".into(),
        };
        let config = StorageConfig::from(source);
        let url = config
            .cloud_storage_options()
            .and_then(|o| o.file_set.as_ref())
            .map(|f| f.url.as_str());
        assert_eq!(url, Some("gs://my-bucket/my-file.txt"));
        assert!(config.big_query_options().is_none(), "{config:?}");
        assert!(config.datastore_options().is_none(), "{config:?}");
    }

    #[test]
    fn big_query_config() {
        let source = StorageSource::BigQuery {
            project_id: "data".into(),
            dataset_id: "my-dataset".into(),
            table_id: "my-table".into(),
        };
        let config = StorageConfig::from(source);
        let table = config
            .big_query_options()
            .and_then(|o| o.table_reference.clone());
        let want = BigQueryTable::new()
            .set_project_id("data")
            .set_dataset_id("my-dataset")
            .set_table_id("my-table");
        assert_eq!(table, Some(want));
    }

    #[test]
    fn datastore_config() {
        let source = StorageSource::Datastore {
            project_id: "data".into(),
            namespace_id: String::new(),
            kind: "Person".into(),
        };
        let config = StorageConfig::from(source);
        let options = config.datastore_options().expect("datastore options");
        assert_eq!(
            options.partition_id,
            Some(PartitionId::new().set_project_id("data"))
        );
        assert_eq!(options.kind, Some(KindExpression::new().set_name("Person")));
    }

    #[test_case(StorageSource::CloudStorage { bucket: "b".into(), file: "f".into() }, "inspectGCSFile")]
    #[test_case(StorageSource::BigQuery { project_id: "p".into(), dataset_id: "d".into(), table_id: "t".into() }, "inspectBigquery")]
    #[test_case(StorageSource::Datastore { project_id: "p".into(), namespace_id: "n".into(), kind: "k".into() }, "inspectDatastore")]
    fn operation(source: StorageSource, want: &str) {
        assert_eq!(source.operation(), want);
    }

    #[test]
    fn job_request() {
        let source = StorageSource::CloudStorage {
            bucket: "my-bucket".into(),
            file: "my-file.txt".into(),
        };
        let request = create_job_request(&settings(), source.clone());
        assert_eq!(request.parent, "projects/calling");
        assert!(request.job_id.is_empty(), "{request:?}");
        let job = request.inspect_job.expect("request has an inspect job");
        assert_eq!(job.storage_config, Some(StorageConfig::from(source)));
        let want = InspectConfig::new()
            .set_info_types(
                ["PHONE_NUMBER", "EMAIL_ADDRESS", "CREDIT_CARD_NUMBER"].map(InfoType::from),
            )
            .set_limits(dlp::model::FindingLimits::new())
            .set_include_quote(true);
        assert_eq!(job.inspect_config, Some(want));
        let topics = job
            .actions
            .iter()
            .filter_map(|a| a.pub_sub())
            .map(|p| p.topic.as_str())
            .collect::<Vec<_>>();
        assert_eq!(topics, ["projects/calling/topics/my-topic"]);
    }

    #[tokio::test(start_paused = true)]
    async fn run_success() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .withf(|r, _| r.parent == "projects/calling")
            .return_once(|_, _| {
                Ok(Response::from(
                    DlpJob::new().set_name(JOB).set_state(JobState::Pending),
                ))
            });
        mock.expect_get_dlp_job()
            .withf(|r, _| r.name == JOB)
            .return_once(|_, _| {
                Ok(Response::from(
                    DlpJob::new().set_name(JOB).set_state(JobState::Done),
                ))
            });
        mock.expect_cancel_dlp_job().never();
        let client = DlpService::from_stub(mock);

        let mut notifications = FakeNotifications::default();
        notifications.push_message("ack-1", job_message("projects/calling/dlpJobs/other"));
        notifications.push_message("ack-2", job_message(JOB));

        let source = StorageSource::Datastore {
            project_id: "data".into(),
            namespace_id: String::new(),
            kind: "Person".into(),
        };
        let start = tokio::time::Instant::now();
        let job = run_inspect_job(&client, &mut notifications, &settings(), source).await?;
        assert_eq!(job.name, JOB);
        assert_eq!(job.state, JobState::Done);
        assert!(start.elapsed() >= DEFAULT_SETTLE_DELAY, "{:?}", start.elapsed());
        assert_eq!(notifications.results(), ["nack:ack-1", "ack:ack-2"]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn run_timeout_cancels_job() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .return_once(|_, _| Ok(Response::from(DlpJob::new().set_name(JOB))));
        mock.expect_cancel_dlp_job()
            .withf(|r, _| r.name == JOB)
            .times(1)
            .return_once(|_, _| Ok(Response::from(())));
        mock.expect_get_dlp_job().never();
        let client = DlpService::from_stub(mock);

        let mut notifications = FakeNotifications::default();
        let settings = JobSettings {
            wait_timeout: Duration::from_secs(10),
            ..settings()
        };
        let source = StorageSource::CloudStorage {
            bucket: "b".into(),
            file: "f".into(),
        };
        let err = run_inspect_job(&client, &mut notifications, &settings, source)
            .await
            .unwrap_err();
        let wait = err.downcast_ref::<WaitError>();
        assert!(wait.is_some_and(WaitError::is_timeout), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn run_timeout_cancel_error() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .return_once(|_, _| Ok(Response::from(DlpJob::new().set_name(JOB))));
        mock.expect_cancel_dlp_job()
            .times(1)
            .return_once(|_, _| Err(gax::error::Error::io("cannot connect")));
        let client = DlpService::from_stub(mock);

        let mut notifications = FakeNotifications::default();
        let settings = JobSettings {
            wait_timeout: Duration::from_secs(10),
            ..settings()
        };
        let source = StorageSource::CloudStorage {
            bucket: "b".into(),
            file: "f".into(),
        };
        let err = run_inspect_job(&client, &mut notifications, &settings, source)
            .await
            .unwrap_err();
        // The timeout is reported, not the cancellation failure.
        let wait = err.downcast_ref::<WaitError>();
        assert!(wait.is_some_and(WaitError::is_timeout), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn run_create_error() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .return_once(|_, _| Err(gax::error::Error::io("cannot connect")));
        let client = DlpService::from_stub(mock);

        let mut notifications = FakeNotifications::default();
        let source = StorageSource::CloudStorage {
            bucket: "b".into(),
            file: "f".into(),
        };
        let err = run_inspect_job(&client, &mut notifications, &settings(), source)
            .await
            .unwrap_err();
        let source = err.downcast_ref::<gax::error::Error>();
        assert!(source.is_some_and(|e| e.is_io()), "{err:?}");
        assert!(notifications.results().is_empty());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn run_channel_error() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .return_once(|_, _| Ok(Response::from(DlpJob::new().set_name(JOB))));
        mock.expect_cancel_dlp_job().never();
        mock.expect_get_dlp_job().never();
        let client = DlpService::from_stub(mock);

        let mut notifications = FakeNotifications::default();
        notifications
            .items
            .push_back(Err(gax::error::Error::io("connection reset")));
        let source = StorageSource::CloudStorage {
            bucket: "b".into(),
            file: "f".into(),
        };
        let err = run_inspect_job(&client, &mut notifications, &settings(), source)
            .await
            .unwrap_err();
        let wait = err.downcast_ref::<WaitError>();
        assert!(matches!(wait, Some(WaitError::Channel(_))), "{err:?}");
        Ok(())
    }
}
