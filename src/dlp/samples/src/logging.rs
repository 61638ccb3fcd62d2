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

//! Logging for the samples binary.

/// Installs a global `tracing` subscriber writing to stderr.
///
/// Standard output is reserved for the sample reports.
pub fn enable_tracing(max_level: tracing::Level) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
