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

//! Inspect content and storage for sensitive data.
//!
//! Run `dlp-inspect --help` for the list of samples and their options.

use clap::Parser;
use dlp::client::DlpService;
use inspect_samples::args::{Cli, Command};
use inspect_samples::{inspect, jobs, logging, notification};
use pubsub::client::{SubscriptionAdmin, Subscriber, TopicAdmin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::enable_tracing(cli.log_level)?;
    tracing::debug!("Configuration: {cli:?}");

    let operation = cli.operation();
    if let Err(e) = run(&cli).await {
        tracing::error!("error in {operation}: {e:?}");
        println!("Error in {operation}: {e:#}");
    }
    Ok(())
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    cli.validate()?;
    let client = cli
        .dlp_endpoint
        .iter()
        .fold(DlpService::builder(), |b, v| b.with_endpoint(v))
        .build()
        .await?;
    let settings = cli.inspect_settings();

    match &cli.command {
        Command::String { text } => {
            inspect::inspect_string(&client, &settings, text).await?;
        }
        Command::File { path } => {
            inspect::inspect_file(&client, &settings, path).await?;
        }
        Command::Image { path } => {
            inspect::inspect_image_file(&client, &settings, path).await?;
        }
        Command::GcsFile { .. } | Command::BigQuery { .. } | Command::Datastore { .. } => {
            run_job(cli, &client).await?;
        }
    }
    Ok(())
}

async fn run_job(cli: &Cli, client: &DlpService) -> anyhow::Result<()> {
    let Some((settings, source)) = cli.job() else {
        anyhow::bail!("{} does not run an inspection job", cli.operation())
    };
    let topic_admin = cli
        .pubsub_endpoint
        .iter()
        .fold(TopicAdmin::builder(), |b, v| b.with_endpoint(v))
        .build()
        .await?;
    let subscription_admin = cli
        .pubsub_endpoint
        .iter()
        .fold(SubscriptionAdmin::builder(), |b, v| b.with_endpoint(v))
        .build()
        .await?;
    let subscriber = cli
        .pubsub_endpoint
        .iter()
        .fold(Subscriber::builder(), |b, v| b.with_endpoint(v))
        .build()
        .await?;

    let mut session = notification::open_notifications(
        &topic_admin,
        &subscription_admin,
        &subscriber,
        &settings.inspect.calling_project_id,
        &settings.topic_id,
        &settings.subscription_id,
    )
    .await?;
    let result = jobs::run_inspect_job(client, &mut session, &settings, source).await;
    if let Err(e) = session.close().await {
        tracing::warn!("error closing the notification session: {e}");
    }
    result.map(|_| ())
}
