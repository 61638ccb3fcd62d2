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

//! The messages exchanged with the DLP v2 REST API.
//!
//! All messages use the proto3 JSON mapping: field names in `camelCase`,
//! 64-bit integers as strings, bytes as base64 strings, and enums as their
//! value names. Unknown fields in responses are ignored.

/// Defines an enum serialized as its value name.
///
/// Values unknown to this version of the library are preserved in the
/// `UnknownValue` variant, so responses from newer versions of the service
/// still deserialize.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $value:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
            /// A value not known to this version of the library.
            UnknownValue(String),
        }

        impl $name {
            /// The value name, as used in the JSON representation.
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::UnknownValue(v) => v.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)*
                    other => Self::UnknownValue(other.to_string()),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

string_enum! {
    /// Coarse-grained confidence level of how well a finding satisfies the
    /// info type.
    Likelihood {
        /// Default value, same as `Possible`.
        Unspecified => "LIKELIHOOD_UNSPECIFIED",
        /// Highest chance of a false positive.
        VeryUnlikely => "VERY_UNLIKELY",
        /// High chance of a false positive.
        Unlikely => "UNLIKELY",
        /// Some matching signals.
        Possible => "POSSIBLE",
        /// Low chance of a false positive.
        Likely => "LIKELY",
        /// Confidence level is high, lowest chance of a false positive.
        VeryLikely => "VERY_LIKELY",
    }
}

impl Default for Likelihood {
    fn default() -> Self {
        Self::Unspecified
    }
}

string_enum! {
    /// The type of data stored in a [ByteContentItem].
    BytesType {
        /// Unused.
        Unspecified => "BYTES_TYPE_UNSPECIFIED",
        /// Any image type.
        Image => "IMAGE",
        /// jpeg
        ImageJpeg => "IMAGE_JPEG",
        /// bmp
        ImageBmp => "IMAGE_BMP",
        /// png
        ImagePng => "IMAGE_PNG",
        /// svg
        ImageSvg => "IMAGE_SVG",
        /// plain text
        TextUtf8 => "TEXT_UTF8",
        /// docx, docm, dotx, dotm
        WordDocument => "WORD_DOCUMENT",
        /// pdf
        Pdf => "PDF",
        /// csv
        Csv => "CSV",
        /// tsv
        Tsv => "TSV",
    }
}

impl Default for BytesType {
    fn default() -> Self {
        Self::Unspecified
    }
}

string_enum! {
    /// Possible states of a DLP job.
    JobState {
        /// Unused.
        Unspecified => "JOB_STATE_UNSPECIFIED",
        /// The job has not yet started.
        Pending => "PENDING",
        /// The job is currently running.
        Running => "RUNNING",
        /// The job is no longer running.
        Done => "DONE",
        /// The job was canceled before it could be completed.
        Canceled => "CANCELED",
        /// The job had an error and did not complete.
        Failed => "FAILED",
        /// The job is currently accepting findings via hybrid inspect.
        Active => "ACTIVE",
    }
}

impl Default for JobState {
    fn default() -> Self {
        Self::Unspecified
    }
}

/// Type of information detected by the API, e.g. `PHONE_NUMBER`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InfoType {
    /// Name of the information type.
    pub name: String,
}

impl InfoType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl From<&str> for InfoType {
    fn from(value: &str) -> Self {
        Self::new().set_name(value)
    }
}

impl From<String> for InfoType {
    fn from(value: String) -> Self {
        Self::new().set_name(value)
    }
}

/// Limits on the number of findings returned.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FindingLimits {
    /// Max number of findings per request. When set to 0 the service uses
    /// its maximum.
    pub max_findings_per_request: i32,

    /// Max number of findings per content item or long running job.
    pub max_findings_per_item: i32,
}

impl FindingLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `max_findings_per_request`.
    pub fn set_max_findings_per_request<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_findings_per_request = v.into();
        self
    }

    /// Sets the value of `max_findings_per_item`.
    pub fn set_max_findings_per_item<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_findings_per_item = v.into();
        self
    }
}

/// Configuration of the scanning process.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InspectConfig {
    /// Restricts what info types to look for.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub info_types: Vec<InfoType>,

    /// Only returns findings equal to or above this threshold.
    pub min_likelihood: Likelihood,

    /// Configuration to control the number of findings returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<FindingLimits>,

    /// When true, a contextual quote from the data that triggered a finding
    /// is included in the response.
    pub include_quote: bool,
}

impl InspectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `info_types`.
    pub fn set_info_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<InfoType>,
    {
        self.info_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of `min_likelihood`.
    pub fn set_min_likelihood<T: Into<Likelihood>>(mut self, v: T) -> Self {
        self.min_likelihood = v.into();
        self
    }

    /// Sets the value of `limits`.
    pub fn set_limits<T: Into<FindingLimits>>(mut self, v: T) -> Self {
        self.limits = Some(v.into());
        self
    }

    /// Sets the value of `include_quote`.
    pub fn set_include_quote<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_quote = v.into();
        self
    }
}

/// Container for bytes to inspect or redact.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ByteContentItem {
    /// The type of data stored in the bytes string.
    pub r#type: BytesType,

    /// Content data to inspect or redact.
    #[serde_as(as = "serde_with::base64::Base64")]
    pub data: bytes::Bytes,
}

impl ByteContentItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `type`.
    pub fn set_type<T: Into<BytesType>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of `data`.
    pub fn set_data<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }
}

/// Type of content to inspect.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContentItem {
    /// Data of the item, either inline text or a byte array.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data_item: Option<content_item::DataItem>,
}

impl ContentItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of `data_item` if it holds a `Value`.
    pub fn value(&self) -> Option<&String> {
        match &self.data_item {
            Some(content_item::DataItem::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of `data_item` if it holds a `ByteItem`.
    pub fn byte_item(&self) -> Option<&ByteContentItem> {
        match &self.data_item {
            Some(content_item::DataItem::ByteItem(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets `data_item` to hold a `Value`.
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.data_item = Some(content_item::DataItem::Value(v.into()));
        self
    }

    /// Sets `data_item` to hold a `ByteItem`.
    pub fn set_byte_item<T: Into<ByteContentItem>>(mut self, v: T) -> Self {
        self.data_item = Some(content_item::DataItem::ByteItem(Box::new(v.into())));
        self
    }
}

/// Defines additional types related to [ContentItem].
pub mod content_item {
    /// Data of the item.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum DataItem {
        /// String data to inspect or redact.
        Value(String),
        /// Content data to inspect or redact.
        ByteItem(Box<super::ByteContentItem>),
    }
}

/// Represents a piece of potentially sensitive content.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Finding {
    /// The content that was found. Only set when the inspect config requests
    /// quotes.
    pub quote: String,

    /// The type of content that might have been found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_type: Option<InfoType>,

    /// Confidence of how likely it is that the `info_type` is correct.
    pub likelihood: Likelihood,

    /// Timestamp when the finding was detected, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Finding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `quote`.
    pub fn set_quote<T: Into<String>>(mut self, v: T) -> Self {
        self.quote = v.into();
        self
    }

    /// Sets the value of `info_type`.
    pub fn set_info_type<T: Into<InfoType>>(mut self, v: T) -> Self {
        self.info_type = Some(v.into());
        self
    }

    /// Sets the value of `likelihood`.
    pub fn set_likelihood<T: Into<Likelihood>>(mut self, v: T) -> Self {
        self.likelihood = v.into();
        self
    }
}

/// All the findings for a single scanned item.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InspectResult {
    /// List of findings for an item.
    pub findings: Vec<Finding>,

    /// If true, then this item might have more findings than were returned.
    pub findings_truncated: bool,
}

impl InspectResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `findings`.
    pub fn set_findings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Finding>,
    {
        self.findings = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of `findings_truncated`.
    pub fn set_findings_truncated<T: Into<bool>>(mut self, v: T) -> Self {
        self.findings_truncated = v.into();
        self
    }
}

/// Request to search for potentially sensitive info in a [ContentItem].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InspectContentRequest {
    /// Parent resource name, e.g. `projects/my-project`.
    pub parent: String,

    /// Configuration for the inspector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspect_config: Option<InspectConfig>,

    /// The item to inspect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ContentItem>,
}

impl InspectContentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `parent`.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of `inspect_config`.
    pub fn set_inspect_config<T: Into<InspectConfig>>(mut self, v: T) -> Self {
        self.inspect_config = Some(v.into());
        self
    }

    /// Sets the value of `item`.
    pub fn set_item<T: Into<ContentItem>>(mut self, v: T) -> Self {
        self.item = Some(v.into());
        self
    }
}

/// Results of inspecting an item.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InspectContentResponse {
    /// The findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

impl InspectContentResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `result`.
    pub fn set_result<T: Into<InspectResult>>(mut self, v: T) -> Self {
        self.result = Some(v.into());
        self
    }
}

/// Shared message indicating Cloud Storage type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloudStorageOptions {
    /// The set of one or more files to scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_set: Option<FileSet>,
}

impl CloudStorageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `file_set`.
    pub fn set_file_set<T: Into<FileSet>>(mut self, v: T) -> Self {
        self.file_set = Some(v.into());
        self
    }
}

/// Set of files to scan.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FileSet {
    /// The Cloud Storage url of the file(s) to scan, e.g. `gs://bucket/file`.
    /// May contain a trailing wildcard.
    pub url: String,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `url`.
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }
}

/// Datastore partition ID.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartitionId {
    /// The ID of the project to which the entities belong.
    pub project_id: String,

    /// If not empty, the ID of the namespace to which the entities belong.
    pub namespace_id: String,
}

impl PartitionId {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `project_id`.
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of `namespace_id`.
    pub fn set_namespace_id<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_id = v.into();
        self
    }
}

/// A representation of a Datastore kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KindExpression {
    /// The name of the kind.
    pub name: String,
}

impl KindExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Options defining a data set within Datastore.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DatastoreOptions {
    /// A partition ID identifies a grouping of entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<PartitionId>,

    /// The kind to process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<KindExpression>,
}

impl DatastoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `partition_id`.
    pub fn set_partition_id<T: Into<PartitionId>>(mut self, v: T) -> Self {
        self.partition_id = Some(v.into());
        self
    }

    /// Sets the value of `kind`.
    pub fn set_kind<T: Into<KindExpression>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// Message defining the location of a BigQuery table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BigQueryTable {
    /// The Google Cloud project ID of the project containing the table.
    pub project_id: String,

    /// Dataset ID of the table.
    pub dataset_id: String,

    /// Name of the table.
    pub table_id: String,
}

impl BigQueryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `project_id`.
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of `dataset_id`.
    pub fn set_dataset_id<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset_id = v.into();
        self
    }

    /// Sets the value of `table_id`.
    pub fn set_table_id<T: Into<String>>(mut self, v: T) -> Self {
        self.table_id = v.into();
        self
    }
}

/// Options defining BigQuery table and row identifiers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BigQueryOptions {
    /// Complete BigQuery table reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_reference: Option<BigQueryTable>,
}

impl BigQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `table_reference`.
    pub fn set_table_reference<T: Into<BigQueryTable>>(mut self, v: T) -> Self {
        self.table_reference = Some(v.into());
        self
    }
}

/// Shared message indicating the storage repository to inspect.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageConfig {
    /// The storage repository.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<storage_config::Type>,
}

impl StorageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of `type` if it holds `CloudStorageOptions`.
    pub fn cloud_storage_options(&self) -> Option<&CloudStorageOptions> {
        match &self.r#type {
            Some(storage_config::Type::CloudStorageOptions(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of `type` if it holds `DatastoreOptions`.
    pub fn datastore_options(&self) -> Option<&DatastoreOptions> {
        match &self.r#type {
            Some(storage_config::Type::DatastoreOptions(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of `type` if it holds `BigQueryOptions`.
    pub fn big_query_options(&self) -> Option<&BigQueryOptions> {
        match &self.r#type {
            Some(storage_config::Type::BigQueryOptions(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets `type` to hold `CloudStorageOptions`.
    pub fn set_cloud_storage_options<T: Into<CloudStorageOptions>>(mut self, v: T) -> Self {
        self.r#type = Some(storage_config::Type::CloudStorageOptions(Box::new(
            v.into(),
        )));
        self
    }

    /// Sets `type` to hold `DatastoreOptions`.
    pub fn set_datastore_options<T: Into<DatastoreOptions>>(mut self, v: T) -> Self {
        self.r#type = Some(storage_config::Type::DatastoreOptions(Box::new(v.into())));
        self
    }

    /// Sets `type` to hold `BigQueryOptions`.
    pub fn set_big_query_options<T: Into<BigQueryOptions>>(mut self, v: T) -> Self {
        self.r#type = Some(storage_config::Type::BigQueryOptions(Box::new(v.into())));
        self
    }
}

/// Defines additional types related to [StorageConfig].
pub mod storage_config {
    /// The storage repository.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Type {
        /// Google Cloud Datastore options.
        DatastoreOptions(Box<super::DatastoreOptions>),
        /// Cloud Storage options.
        CloudStorageOptions(Box<super::CloudStorageOptions>),
        /// BigQuery options.
        BigQueryOptions(Box<super::BigQueryOptions>),
    }
}

/// Publish a message into a Pub/Sub topic when the job completes.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PublishToPubSub {
    /// Cloud Pub/Sub topic to send notifications to, in the format
    /// `projects/{project}/topics/{topic}`.
    pub topic: String,
}

impl PublishToPubSub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `topic`.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }
}

/// A task to execute on the completion of a job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Action {
    /// The action to run.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub action: Option<action::Action>,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of `action` if it holds a `PubSub`.
    pub fn pub_sub(&self) -> Option<&PublishToPubSub> {
        match &self.action {
            Some(action::Action::PubSub(v)) => Some(v),
            None => None,
        }
    }

    /// Sets `action` to hold a `PubSub`.
    pub fn set_pub_sub<T: Into<PublishToPubSub>>(mut self, v: T) -> Self {
        self.action = Some(action::Action::PubSub(Box::new(v.into())));
        self
    }
}

/// Defines additional types related to [Action].
pub mod action {
    /// The action to run.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Action {
        /// Publish a notification to a Pub/Sub topic.
        PubSub(Box<super::PublishToPubSub>),
    }
}

/// Controls what and how to inspect for findings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InspectJobConfig {
    /// The data to scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_config: Option<StorageConfig>,

    /// How and what to scan for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspect_config: Option<InspectConfig>,

    /// Actions to execute at the completion of the job.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl InspectJobConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `storage_config`.
    pub fn set_storage_config<T: Into<StorageConfig>>(mut self, v: T) -> Self {
        self.storage_config = Some(v.into());
        self
    }

    /// Sets the value of `inspect_config`.
    pub fn set_inspect_config<T: Into<InspectConfig>>(mut self, v: T) -> Self {
        self.inspect_config = Some(v.into());
        self
    }

    /// Sets the value of `actions`.
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Action>,
    {
        self.actions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Request message for `CreateDlpJob`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateDlpJobRequest {
    /// Parent resource name, e.g. `projects/my-project`.
    pub parent: String,

    /// An inspection job scans a storage repository for info types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspect_job: Option<InspectJobConfig>,

    /// The job id can contain letters, numbers and hyphens. If empty the
    /// service assigns one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_id: String,
}

impl CreateDlpJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `parent`.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of `inspect_job`.
    pub fn set_inspect_job<T: Into<InspectJobConfig>>(mut self, v: T) -> Self {
        self.inspect_job = Some(v.into());
        self
    }

    /// Sets the value of `job_id`.
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// The request message for `GetDlpJob`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDlpJobRequest {
    /// The name of the job, e.g. `projects/my-project/dlpJobs/i-1234`.
    pub name: String,
}

impl GetDlpJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for canceling a DLP job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelDlpJobRequest {
    /// The name of the job to cancel.
    pub name: String,
}

impl CancelDlpJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Statistics regarding a specific info type.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InfoTypeStats {
    /// The type of finding this stat is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_type: Option<InfoType>,

    /// Number of findings for this info type.
    #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
    pub count: i64,
}

impl InfoTypeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `info_type`.
    pub fn set_info_type<T: Into<InfoType>>(mut self, v: T) -> Self {
        self.info_type = Some(v.into());
        self
    }

    /// Sets the value of `count`.
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = v.into();
        self
    }
}

/// The results of an inspect job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InspectDataSourceDetails {
    /// A summary of the outcome of this inspection job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<inspect_data_source_details::Result>,
}

impl InspectDataSourceDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `result`.
    pub fn set_result<T: Into<inspect_data_source_details::Result>>(mut self, v: T) -> Self {
        self.result = Some(v.into());
        self
    }
}

/// Defines additional types related to [InspectDataSourceDetails].
pub mod inspect_data_source_details {
    /// All result fields mentioned below are updated while the job is
    /// processing.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Result {
        /// Total size in bytes that were processed.
        #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
        pub processed_bytes: i64,

        /// Estimate of the number of bytes to process.
        #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
        pub total_estimated_bytes: i64,

        /// Statistics of how many instances of each info type were found
        /// during the inspect job.
        pub info_type_stats: Vec<super::InfoTypeStats>,
    }

    impl Result {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of `processed_bytes`.
        pub fn set_processed_bytes<T: Into<i64>>(mut self, v: T) -> Self {
            self.processed_bytes = v.into();
            self
        }

        /// Sets the value of `total_estimated_bytes`.
        pub fn set_total_estimated_bytes<T: Into<i64>>(mut self, v: T) -> Self {
            self.total_estimated_bytes = v.into();
            self
        }

        /// Sets the value of `info_type_stats`.
        pub fn set_info_type_stats<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<super::InfoTypeStats>,
        {
            self.info_type_stats = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }
}

/// Details about an error encountered while running a job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DlpJobError {
    /// Detailed error codes and messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<gax::error::rpc::Status>,

    /// The times the error occurred, in RFC 3339 format.
    pub timestamps: Vec<String>,
}

/// Combines all of the information about a DLP job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DlpJob {
    /// The server-assigned name.
    pub name: String,

    /// The type of job, e.g. `INSPECT_JOB`.
    pub r#type: String,

    /// State of a job.
    pub state: JobState,

    /// Results from inspecting a data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspect_details: Option<InspectDataSourceDetails>,

    /// Time when the job was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// Time when the job started, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Time when the job finished, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// A stream of errors encountered running the job.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DlpJobError>,
}

impl DlpJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of `type`.
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of `state`.
    pub fn set_state<T: Into<JobState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of `inspect_details`.
    pub fn set_inspect_details<T: Into<InspectDataSourceDetails>>(mut self, v: T) -> Self {
        self.inspect_details = Some(v.into());
        self
    }

    /// The info type statistics, empty if the job has no inspection results.
    pub fn info_type_stats(&self) -> &[InfoTypeStats] {
        self.inspect_details
            .as_ref()
            .and_then(|d| d.result.as_ref())
            .map(|r| r.info_type_stats.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Likelihood::Unspecified, "LIKELIHOOD_UNSPECIFIED")]
    #[test_case(Likelihood::VeryLikely, "VERY_LIKELY")]
    #[test_case(Likelihood::UnknownValue("SOMEWHAT_LIKELY".into()), "SOMEWHAT_LIKELY")]
    fn likelihood_names(value: Likelihood, name: &str) -> Result<()> {
        assert_eq!(value.name(), name);
        assert_eq!(value.to_string(), name);
        assert_eq!(Likelihood::from(name), value);
        assert_eq!(serde_json::to_value(&value)?, json!(name));
        assert_eq!(serde_json::from_value::<Likelihood>(json!(name))?, value);
        Ok(())
    }

    #[test]
    fn inspect_content_request_json() -> Result<()> {
        let request = InspectContentRequest::new()
            .set_parent("projects/my-project")
            .set_inspect_config(
                InspectConfig::new()
                    .set_info_types(["PHONE_NUMBER", "EMAIL_ADDRESS"])
                    .set_min_likelihood(Likelihood::Possible)
                    .set_limits(FindingLimits::new().set_max_findings_per_request(5))
                    .set_include_quote(true),
            )
            .set_item(ContentItem::new().set_value("My phone number is (123) 456-7890"));
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "parent": "projects/my-project",
            "inspectConfig": {
                "infoTypes": [{"name": "PHONE_NUMBER"}, {"name": "EMAIL_ADDRESS"}],
                "minLikelihood": "POSSIBLE",
                "limits": {"maxFindingsPerRequest": 5, "maxFindingsPerItem": 0},
                "includeQuote": true,
            },
            "item": {"value": "My phone number is (123) 456-7890"},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn byte_item_json() -> Result<()> {
        let item = ContentItem::new().set_byte_item(
            ByteContentItem::new()
                .set_type(BytesType::Image)
                .set_data(bytes::Bytes::from_static(b"hello")),
        );
        let got = serde_json::to_value(&item)?;
        assert_eq!(
            got,
            json!({"byteItem": {"type": "IMAGE", "data": "aGVsbG8="}})
        );
        let roundtrip = serde_json::from_value::<ContentItem>(got)?;
        assert_eq!(
            roundtrip.byte_item().map(|b| b.data.clone()),
            Some(bytes::Bytes::from_static(b"hello"))
        );
        assert!(roundtrip.value().is_none(), "{roundtrip:?}");
        Ok(())
    }

    #[test]
    fn storage_config_json() -> Result<()> {
        let config = StorageConfig::new().set_cloud_storage_options(
            CloudStorageOptions::new().set_file_set(FileSet::new().set_url("gs://bucket/file.txt")),
        );
        let got = serde_json::to_value(&config)?;
        assert_eq!(
            got,
            json!({"cloudStorageOptions": {"fileSet": {"url": "gs://bucket/file.txt"}}})
        );

        let config = serde_json::from_value::<StorageConfig>(json!({
            "bigQueryOptions": {
                "tableReference": {"projectId": "p", "datasetId": "d", "tableId": "t"}
            }
        }))?;
        let table = config
            .big_query_options()
            .and_then(|o| o.table_reference.clone())
            .unwrap_or_default();
        assert_eq!(table.table_id, "t");
        assert!(config.cloud_storage_options().is_none(), "{config:?}");
        Ok(())
    }

    #[test]
    fn create_job_request_json() -> Result<()> {
        let request = CreateDlpJobRequest::new()
            .set_parent("projects/p")
            .set_inspect_job(
                InspectJobConfig::new()
                    .set_storage_config(StorageConfig::new().set_datastore_options(
                        DatastoreOptions::new()
                            .set_partition_id(PartitionId::new().set_project_id("p"))
                            .set_kind(KindExpression::new().set_name("Person")),
                    ))
                    .set_actions([
                        Action::new().set_pub_sub(PublishToPubSub::new().set_topic("projects/p/topics/t"))
                    ]),
            );
        let got = serde_json::to_value(&request)?;
        assert_eq!(got.get("parent"), Some(&json!("projects/p")));
        assert!(got.get("jobId").is_none(), "{got:?}");
        assert_eq!(
            got.pointer("/inspectJob/actions/0/pubSub/topic"),
            Some(&json!("projects/p/topics/t"))
        );
        assert_eq!(
            got.pointer("/inspectJob/storageConfig/datastoreOptions/kind/name"),
            Some(&json!("Person"))
        );
        Ok(())
    }

    #[test]
    fn dlp_job_from_service() -> Result<()> {
        let job = serde_json::from_value::<DlpJob>(json!({
            "name": "projects/p/dlpJobs/i-123",
            "type": "INSPECT_JOB",
            "state": "DONE",
            "createTime": "2025-01-02T03:04:05Z",
            "inspectDetails": {
                "requestedOptions": {"snapshotInspectTemplate": {}},
                "result": {
                    "processedBytes": "1024",
                    "totalEstimatedBytes": 2048,
                    "infoTypeStats": [
                        {"infoType": {"name": "EMAIL_ADDRESS"}, "count": "3"},
                        {"infoType": {"name": "PHONE_NUMBER"}, "count": 1}
                    ]
                }
            },
            "unknownField": true
        }))?;
        assert_eq!(job.state, JobState::Done);
        assert_eq!(job.r#type, "INSPECT_JOB");
        let stats = job.info_type_stats();
        assert_eq!(stats.len(), 2, "{job:?}");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[1].count, 1);
        let result = job
            .inspect_details
            .as_ref()
            .and_then(|d| d.result.clone())
            .unwrap_or_default();
        assert_eq!(result.processed_bytes, 1024);
        assert_eq!(result.total_estimated_bytes, 2048);
        assert_eq!(serde_json::to_value(&stats[0])?["count"], json!("3"));
        Ok(())
    }

    #[test]
    fn dlp_job_without_details() {
        let job = DlpJob::new().set_state(JobState::Running);
        assert!(job.info_type_stats().is_empty());
    }
}
