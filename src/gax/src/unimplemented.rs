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

/// The default body of every stub trait method.
///
/// The stub traits provide a default for each method so adding new RPCs is
/// not a breaking change. The clients override every method, this is only
/// reachable from a test mock that does not cover all the methods it uses.
pub async fn unimplemented_stub<T: Send>() -> crate::Result<crate::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide default implementations of each method, ",
        "and the client libraries override all of them. If you see this ",
        "error in test code, verify that your mock implements all the ",
        "methods used in the test."
    ));
}
