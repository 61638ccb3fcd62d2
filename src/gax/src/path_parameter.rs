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

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Returns `value` if it is not empty, otherwise a binding error naming the
/// missing parameter.
pub fn required<'a>(value: &'a str, name: &str) -> crate::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}
