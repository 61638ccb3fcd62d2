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

//! Command line arguments for the `dlp-inspect` binary.

use crate::inspect::{DEFAULT_INFO_TYPES, InspectSettings};
use crate::jobs::{JobSettings, StorageSource};
use anyhow::bail;
use clap::{ArgAction, Parser, Subcommand};
use dlp::model::Likelihood;
use humantime::parse_duration;
use std::path::PathBuf;
use std::time::Duration;

const DESCRIPTION: &str = concat!(
    "Inspects strings, local files, and cloud storage for sensitive data",
    " using the Sensitive Data Protection (DLP) API.",
    " Inspection jobs notify their completion on a Pub/Sub topic, the",
    " samples listen on an existing subscription to that topic."
);

/// The likelihood values accepted by `--min-likelihood`.
const LIKELIHOODS: [&str; 6] = [
    "LIKELIHOOD_UNSPECIFIED",
    "VERY_UNLIKELY",
    "UNLIKELY",
    "POSSIBLE",
    "LIKELY",
    "VERY_LIKELY",
];

/// Inspect content and storage for sensitive data.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
pub struct Cli {
    /// The minimum likelihood required before returning a match.
    #[arg(short = 'm', long, global = true, default_value = "LIKELIHOOD_UNSPECIFIED", value_parser = parse_likelihood)]
    pub min_likelihood: Likelihood,

    /// The project used to make the calls and own the notification topic.
    #[arg(short = 'c', long, global = true, env = "GCLOUD_PROJECT", default_value = "")]
    pub calling_project_id: String,

    /// The project containing the inspected data, defaults to the calling
    /// project.
    #[arg(short = 'p', long, global = true, env = "GCLOUD_PROJECT", default_value = "")]
    pub data_project_id: String,

    /// The maximum number of findings to report per request, 0 is the
    /// server maximum.
    #[arg(short = 'f', long, global = true, default_value_t = 0)]
    pub max_findings: i32,

    /// The info types to look for, repeat the flag or separate values with
    /// commas.
    #[arg(short = 't', long, global = true, action = ArgAction::Append, value_delimiter = ',', default_values_t = DEFAULT_INFO_TYPES.map(String::from))]
    pub info_types: Vec<String>,

    /// Include the matched text in the results. A bare `-q` means `true`
    /// when it is last or followed by another option.
    #[arg(short = 'q', long, global = true, action = ArgAction::Set, num_args = 0..=1, default_value_t = true, default_missing_value = "true")]
    pub include_quote: bool,

    /// How long to wait for an inspection job to complete.
    #[arg(long, global = true, value_parser = parse_duration, default_value = "15m")]
    pub wait_timeout: Duration,

    /// How long to wait after the job notification before fetching the
    /// job results.
    #[arg(long, global = true, value_parser = parse_duration, default_value = "500ms")]
    pub settle_delay: Duration,

    /// Override the DLP service endpoint.
    #[arg(long, global = true)]
    pub dlp_endpoint: Option<String>,

    /// Override the Pub/Sub service endpoint.
    #[arg(long, global = true)]
    pub pubsub_endpoint: Option<String>,

    /// The most verbose level logged to stderr.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

/// The samples.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Inspect a string.
    String { text: String },

    /// Inspect a local file, the content type is inferred from its
    /// extension.
    File { path: PathBuf },

    /// Inspect a local image file.
    Image { path: PathBuf },

    /// Inspect a Cloud Storage file using a job.
    #[command(name = "gcsFile", alias = "gcs-file")]
    GcsFile {
        bucket_name: String,
        file_name: String,
        topic_id: String,
        subscription_id: String,
    },

    /// Inspect a BigQuery table using a job.
    #[command(name = "bigquery")]
    BigQuery {
        dataset_name: String,
        table_name: String,
        topic_id: String,
        subscription_id: String,
    },

    /// Inspect a Datastore kind using a job.
    Datastore {
        kind: String,
        topic_id: String,
        subscription_id: String,
        /// The Datastore namespace, the default namespace if empty.
        #[arg(short = 'n', long, default_value = "")]
        namespace_id: String,
    },
}

impl Cli {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.calling_project_id.is_empty() {
            bail!("missing calling project id, use --calling-project-id or set GCLOUD_PROJECT")
        }
        if self.max_findings < 0 {
            bail!("invalid max findings ({}), should be >= 0", self.max_findings)
        }
        if self.info_types.iter().any(String::is_empty) {
            bail!("invalid info types {:?}, names cannot be empty", self.info_types)
        }
        if self.wait_timeout.is_zero() {
            bail!("invalid wait timeout, should be > 0")
        }
        Ok(())
    }

    /// The name of the operation run by the subcommand, used to report
    /// errors.
    pub fn operation(&self) -> &'static str {
        match &self.command {
            Command::String { .. } => "inspectString",
            Command::File { .. } => "inspectFile",
            Command::Image { .. } => "inspectImageFile",
            Command::GcsFile { .. } => "inspectGCSFile",
            Command::BigQuery { .. } => "inspectBigquery",
            Command::Datastore { .. } => "inspectDatastore",
        }
    }

    /// The project containing the inspected data.
    pub fn data_project_id(&self) -> &str {
        if self.data_project_id.is_empty() {
            &self.calling_project_id
        } else {
            &self.data_project_id
        }
    }

    pub fn inspect_settings(&self) -> InspectSettings {
        InspectSettings {
            calling_project_id: self.calling_project_id.clone(),
            data_project_id: self.data_project_id().to_string(),
            min_likelihood: self.min_likelihood.clone(),
            max_findings: self.max_findings,
            info_types: self.info_types.clone(),
            include_quote: self.include_quote,
        }
    }

    /// The job settings and storage source for job subcommands.
    ///
    /// Returns `None` for subcommands inspecting content directly.
    pub fn job(&self) -> Option<(JobSettings, StorageSource)> {
        let project_id = self.data_project_id().to_string();
        let (source, topic_id, subscription_id) = match &self.command {
            Command::String { .. } | Command::File { .. } | Command::Image { .. } => return None,
            Command::GcsFile {
                bucket_name,
                file_name,
                topic_id,
                subscription_id,
            } => (
                StorageSource::CloudStorage {
                    bucket: bucket_name.clone(),
                    file: file_name.clone(),
                },
                topic_id,
                subscription_id,
            ),
            Command::BigQuery {
                dataset_name,
                table_name,
                topic_id,
                subscription_id,
            } => (
                StorageSource::BigQuery {
                    project_id,
                    dataset_id: dataset_name.clone(),
                    table_id: table_name.clone(),
                },
                topic_id,
                subscription_id,
            ),
            Command::Datastore {
                kind,
                topic_id,
                subscription_id,
                namespace_id,
            } => (
                StorageSource::Datastore {
                    project_id,
                    namespace_id: namespace_id.clone(),
                    kind: kind.clone(),
                },
                topic_id,
                subscription_id,
            ),
        };
        let settings = JobSettings {
            wait_timeout: self.wait_timeout,
            settle_delay: self.settle_delay,
            ..JobSettings::new(self.inspect_settings(), topic_id, subscription_id)
        };
        Some((settings, source))
    }
}

fn parse_likelihood(value: &str) -> Result<Likelihood, String> {
    match Likelihood::from(value) {
        Likelihood::UnknownValue(v) => Err(format!(
            "unknown likelihood {v}, expected one of {}",
            LIKELIHOODS.join(", ")
        )),
        likelihood => Ok(likelihood),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(args: &[&str]) -> anyhow::Result<Cli> {
        let mut input = vec!["dlp-inspect", "--calling-project-id=calling"];
        input.extend_from_slice(args);
        Ok(Cli::try_parse_from(input)?)
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let cli = parse(&["string", "My phone number is (223) 456-7890"])?;
        cli.validate()?;
        assert_eq!(
            cli.command,
            Command::String {
                text: "My phone number is (223) 456-7890".into()
            }
        );
        assert_eq!(cli.operation(), "inspectString");
        assert_eq!(cli.min_likelihood, Likelihood::Unspecified);
        assert_eq!(cli.max_findings, 0);
        assert_eq!(
            cli.info_types,
            ["PHONE_NUMBER", "EMAIL_ADDRESS", "CREDIT_CARD_NUMBER"]
        );
        assert!(cli.include_quote);
        assert_eq!(cli.wait_timeout, Duration::from_secs(15 * 60));
        assert_eq!(cli.settle_delay, Duration::from_millis(500));
        assert_eq!(cli.log_level, tracing::Level::WARN);
        assert!(cli.job().is_none(), "{cli:?}");
        Ok(())
    }

    #[test]
    fn global_options() -> anyhow::Result<()> {
        let cli = parse(&[
            "-m",
            "LIKELY",
            "-f",
            "5",
            "-t",
            "EMAIL_ADDRESS,US_SOCIAL_SECURITY_NUMBER",
            "-t",
            "PHONE_NUMBER",
            "-q",
            "false",
            "string",
            "hello",
        ])?;
        cli.validate()?;
        let settings = cli.inspect_settings();
        assert_eq!(settings.calling_project_id, "calling");
        assert_eq!(settings.data_project_id, "calling");
        assert_eq!(settings.min_likelihood, Likelihood::Likely);
        assert_eq!(settings.max_findings, 5);
        assert_eq!(
            settings.info_types,
            ["EMAIL_ADDRESS", "US_SOCIAL_SECURITY_NUMBER", "PHONE_NUMBER"]
        );
        assert!(!settings.include_quote);
        Ok(())
    }

    #[test_case(&["file", "notes.txt"], "inspectFile")]
    #[test_case(&["image", "photo.png"], "inspectImageFile")]
    #[test_case(&["gcsFile", "b", "f", "t", "s"], "inspectGCSFile")]
    #[test_case(&["gcs-file", "b", "f", "t", "s"], "inspectGCSFile")]
    #[test_case(&["bigquery", "d", "t", "t", "s"], "inspectBigquery")]
    #[test_case(&["datastore", "k", "t", "s"], "inspectDatastore")]
    fn operation(args: &[&str], want: &str) -> anyhow::Result<()> {
        let cli = parse(args)?;
        assert_eq!(cli.operation(), want);
        Ok(())
    }

    #[test]
    fn gcs_file_job() -> anyhow::Result<()> {
        let cli = parse(&[
            "--wait-timeout=1m",
            "--settle-delay=2s",
            "gcsFile",
            "my-bucket",
            "my-file.txt",
            "my-topic",
            "my-subscription",
        ])?;
        cli.validate()?;
        let (settings, source) = cli.job().expect("gcsFile is a job");
        assert_eq!(
            source,
            StorageSource::CloudStorage {
                bucket: "my-bucket".into(),
                file: "my-file.txt".into()
            }
        );
        assert_eq!(settings.topic_id, "my-topic");
        assert_eq!(settings.subscription_id, "my-subscription");
        assert_eq!(settings.wait_timeout, Duration::from_secs(60));
        assert_eq!(settings.settle_delay, Duration::from_secs(2));
        Ok(())
    }

    #[test]
    fn bigquery_job() -> anyhow::Result<()> {
        let cli = parse(&[
            "-p",
            "data",
            "bigquery",
            "my-dataset",
            "my-table",
            "my-topic",
            "my-subscription",
        ])?;
        let (settings, source) = cli.job().expect("bigquery is a job");
        assert_eq!(
            source,
            StorageSource::BigQuery {
                project_id: "data".into(),
                dataset_id: "my-dataset".into(),
                table_id: "my-table".into()
            }
        );
        assert_eq!(settings.inspect.calling_project_id, "calling");
        assert_eq!(settings.inspect.data_project_id, "data");
        Ok(())
    }

    #[test_case(&["datastore", "Person", "my-topic", "my-subscription"], "")]
    #[test_case(&["datastore", "Person", "my-topic", "my-subscription", "-n", "ns"], "ns")]
    #[test_case(&["datastore", "-n", "ns", "Person", "my-topic", "my-subscription"], "ns")]
    fn datastore_job(args: &[&str], namespace: &str) -> anyhow::Result<()> {
        let cli = parse(args)?;
        let (_, source) = cli.job().expect("datastore is a job");
        assert_eq!(
            source,
            StorageSource::Datastore {
                project_id: "calling".into(),
                namespace_id: namespace.into(),
                kind: "Person".into()
            }
        );
        Ok(())
    }

    #[test_case(&["-m", "SOMEWHAT_LIKELY", "string", "hello"])]
    #[test_case(&["--wait-timeout=soon", "string", "hello"])]
    #[test_case(&["gcsFile", "my-bucket", "my-file.txt"])]
    #[test_case(&["-q", "maybe", "string", "hello"])]
    fn parse_errors(args: &[&str]) {
        let got = parse(args);
        assert!(got.is_err(), "{got:?}");
    }

    #[test_case(&["--max-findings=-1", "string", "hello"])]
    #[test_case(&["--wait-timeout=0s", "string", "hello"])]
    fn validate_errors(args: &[&str]) -> anyhow::Result<()> {
        let cli = parse(args)?;
        let got = cli.validate();
        assert!(got.is_err(), "{got:?} {cli:?}");
        Ok(())
    }

    #[test]
    fn empty_calling_project() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["dlp-inspect", "--calling-project-id=", "string", "hello"])?;
        assert_eq!(cli.calling_project_id, "");
        let got = cli.validate();
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test_case(&["-q", "-m", "LIKELY", "string", "hello"], true)]
    #[test_case(&["-q", "true", "string", "hello"], true)]
    #[test_case(&["-q", "false", "string", "hello"], false)]
    #[test_case(&["--include-quote=false", "string", "hello"], false)]
    #[test_case(&["string", "hello", "-q"], true)]
    fn include_quote(args: &[&str], want: bool) -> anyhow::Result<()> {
        let cli = parse(args)?;
        assert_eq!(cli.include_quote, want);
        assert_eq!(
            cli.command,
            Command::String {
                text: "hello".into()
            }
        );
        Ok(())
    }

    #[test_case("LIKELIHOOD_UNSPECIFIED", Likelihood::Unspecified)]
    #[test_case("VERY_UNLIKELY", Likelihood::VeryUnlikely)]
    #[test_case("UNLIKELY", Likelihood::Unlikely)]
    #[test_case("POSSIBLE", Likelihood::Possible)]
    #[test_case("LIKELY", Likelihood::Likely)]
    #[test_case("VERY_LIKELY", Likelihood::VeryLikely)]
    fn likelihood(input: &str, want: Likelihood) {
        assert_eq!(parse_likelihood(input), Ok(want));
    }
}
