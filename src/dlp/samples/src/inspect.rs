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

//! Inspect strings and local files for sensitive data.

use anyhow::Context;
use dlp::client::DlpService;
use dlp::model::{
    ByteContentItem, BytesType, ContentItem, FindingLimits, InfoType, InspectConfig,
    InspectContentResponse, Likelihood,
};
use std::path::Path;

/// The info types used when the application does not request any.
pub const DEFAULT_INFO_TYPES: [&str; 3] = ["PHONE_NUMBER", "EMAIL_ADDRESS", "CREDIT_CARD_NUMBER"];

/// The inspection options shared by all the samples.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectSettings {
    /// The project used to make the calls.
    pub calling_project_id: String,
    /// The project that owns the data inspected by jobs.
    pub data_project_id: String,
    /// Only report findings at or above this likelihood.
    pub min_likelihood: Likelihood,
    /// The maximum number of findings per request, 0 is the server maximum.
    pub max_findings: i32,
    /// The info types to look for.
    pub info_types: Vec<String>,
    /// Include the matched text in each finding.
    pub include_quote: bool,
}

impl InspectSettings {
    pub fn new<T: Into<String>>(project_id: T) -> Self {
        let project_id = project_id.into();
        Self {
            calling_project_id: project_id.clone(),
            data_project_id: project_id,
            min_likelihood: Likelihood::Unspecified,
            max_findings: 0,
            info_types: DEFAULT_INFO_TYPES.map(str::to_string).to_vec(),
            include_quote: true,
        }
    }

    /// The parent resource for DLP requests, `projects/{calling_project_id}`.
    pub fn parent(&self) -> String {
        format!("projects/{}", self.calling_project_id)
    }

    /// Builds the inspection configuration sent with each request.
    pub fn inspect_config(&self) -> InspectConfig {
        InspectConfig::new()
            .set_info_types(self.info_types.iter().map(|t| InfoType::from(t.as_str())))
            .set_min_likelihood(self.min_likelihood.clone())
            .set_limits(FindingLimits::new().set_max_findings_per_request(self.max_findings))
            .set_include_quote(self.include_quote)
    }
}

/// Inspects a string and prints the findings.
pub async fn inspect_string(
    client: &DlpService,
    settings: &InspectSettings,
    text: &str,
) -> anyhow::Result<InspectContentResponse> {
    inspect_item(client, settings, ContentItem::new().set_value(text)).await
}

/// Inspects an image file and prints the findings.
///
/// The file contents are sent as a generic image, the service detects the
/// image format.
pub async fn inspect_image_file(
    client: &DlpService,
    settings: &InspectSettings,
    path: &Path,
) -> anyhow::Result<InspectContentResponse> {
    let item = read_item(path, BytesType::Image).await?;
    inspect_item(client, settings, item).await
}

/// Inspects a local file and prints the findings.
///
/// The content type is inferred from the file extension, see [bytes_type].
pub async fn inspect_file(
    client: &DlpService,
    settings: &InspectSettings,
    path: &Path,
) -> anyhow::Result<InspectContentResponse> {
    let item = read_item(path, bytes_type(path)).await?;
    inspect_item(client, settings, item).await
}

/// Returns the content type for a file based on its extension.
pub fn bytes_type(path: &Path) -> BytesType {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => BytesType::ImageJpeg,
        Some("bmp") => BytesType::ImageBmp,
        Some("png") => BytesType::ImagePng,
        Some("svg") => BytesType::ImageSvg,
        Some("txt") => BytesType::TextUtf8,
        _ => BytesType::Unspecified,
    }
}

async fn read_item(path: &Path, bytes_type: BytesType) -> anyhow::Result<ContentItem> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    tracing::debug!(path = %path.display(), size = data.len(), %bytes_type, "read file");
    Ok(ContentItem::new().set_byte_item(
        ByteContentItem::new().set_type(bytes_type).set_data(data),
    ))
}

async fn inspect_item(
    client: &DlpService,
    settings: &InspectSettings,
    item: ContentItem,
) -> anyhow::Result<InspectContentResponse> {
    let response = client
        .inspect_content()
        .set_parent(settings.parent())
        .set_inspect_config(settings.inspect_config())
        .set_item(item)
        .send()
        .await?;
    let findings = response
        .result
        .as_ref()
        .map(|r| r.findings.as_slice())
        .unwrap_or_default();
    print!(
        "{}",
        crate::output::findings_report(findings, settings.include_quote)
    );
    Ok(response)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dlp::model::{
        CancelDlpJobRequest, CreateDlpJobRequest, DlpJob, Finding, GetDlpJobRequest,
        InspectContentRequest, InspectResult,
    };
    use gax::options::RequestOptions;
    use gax::response::Response;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) DlpService {}
        impl dlp::stub::DlpService for DlpService {
            async fn inspect_content(&self, req: InspectContentRequest, options: RequestOptions) -> gax::Result<Response<InspectContentResponse>>;
            async fn create_dlp_job(&self, req: CreateDlpJobRequest, options: RequestOptions) -> gax::Result<Response<DlpJob>>;
            async fn get_dlp_job(&self, req: GetDlpJobRequest, options: RequestOptions) -> gax::Result<Response<DlpJob>>;
            async fn cancel_dlp_job(&self, req: CancelDlpJobRequest, options: RequestOptions) -> gax::Result<Response<()>>;
        }
    }

    fn phone_finding() -> Finding {
        Finding::new()
            .set_quote("(223) 456-7890")
            .set_info_type(InfoType::from("PHONE_NUMBER"))
            .set_likelihood(Likelihood::VeryLikely)
    }

    fn findings_response() -> InspectContentResponse {
        InspectContentResponse::new()
            .set_result(InspectResult::new().set_findings([phone_finding()]))
    }

    #[tokio::test]
    async fn string_request() -> anyhow::Result<()> {
        let settings = InspectSettings {
            min_likelihood: Likelihood::Likely,
            ..InspectSettings::new("calling")
        };
        let config = settings.inspect_config();
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(move |r, _| {
                r.parent == "projects/calling"
                    && r.inspect_config.as_ref() == Some(&config)
                    && r.item.as_ref().and_then(|i| i.value()).map(String::as_str)
                        == Some("My phone number is (223) 456-7890")
            })
            .return_once(|_, _| Ok(Response::from(findings_response())));
        let client = DlpService::from_stub(mock);

        let response =
            inspect_string(&client, &settings, "My phone number is (223) 456-7890").await?;
        assert_eq!(response, findings_response());
        Ok(())
    }

    #[tokio::test]
    async fn image_file_request() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("scan.png");
        std::fs::write(&path, b"\x89PNG")?;

        let settings = InspectSettings::new("calling");
        let config = settings.inspect_config();
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(move |r, _| {
                let item = r.item.as_ref().and_then(|i| i.byte_item());
                r.parent == "projects/calling"
                    && r.inspect_config.as_ref() == Some(&config)
                    && item.is_some_and(|b| {
                        b.r#type == BytesType::Image && b.data.as_ref() == b"\x89PNG"
                    })
            })
            .return_once(|_, _| Ok(Response::from(findings_response())));
        let client = DlpService::from_stub(mock);

        let response = inspect_image_file(&client, &settings, &path).await?;
        assert_eq!(response, findings_response());
        Ok(())
    }

    #[test_case("notes.txt", BytesType::TextUtf8)]
    #[test_case("photo.jpg", BytesType::ImageJpeg)]
    #[test_case("report.pdf", BytesType::Unspecified)]
    #[tokio::test]
    async fn file_request(name: &str, want: BytesType) -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(name);
        std::fs::write(&path, "call me at (223) 456-7890")?;

        let settings = InspectSettings {
            include_quote: false,
            ..InspectSettings::new("calling")
        };
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(move |r, _| {
                let item = r.item.as_ref().and_then(|i| i.byte_item());
                r.parent == "projects/calling"
                    && r.inspect_config.as_ref().is_some_and(|c| !c.include_quote)
                    && item.is_some_and(|b| {
                        b.r#type == want && b.data.as_ref() == b"call me at (223) 456-7890"
                    })
            })
            .return_once(|_, _| Ok(Response::from(findings_response())));
        let client = DlpService::from_stub(mock);

        let response = inspect_file(&client, &settings, &path).await?;
        assert_eq!(response, findings_response());
        Ok(())
    }

    #[tokio::test]
    async fn response_without_result() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .return_once(|_, _| Ok(Response::from(InspectContentResponse::new())));
        let client = DlpService::from_stub(mock);

        let response = inspect_string(&client, &InspectSettings::new("calling"), "hello").await?;
        assert!(response.result.is_none(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .return_once(|_, _| Err(gax::error::Error::io("cannot connect")));
        let client = DlpService::from_stub(mock);

        let err = inspect_string(&client, &InspectSettings::new("calling"), "hello")
            .await
            .unwrap_err();
        let source = err.downcast_ref::<gax::error::Error>();
        assert!(source.is_some_and(|e| e.is_io()), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_not_sent() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content().never();
        let client = DlpService::from_stub(mock);

        let path = dir.path().join("missing.txt");
        let err = inspect_file(&client, &InspectSettings::new("calling"), &path)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.txt"), "{err:?}");
        Ok(())
    }

    #[test]
    fn settings_defaults() {
        let settings = InspectSettings::new("my-project");
        assert_eq!(settings.calling_project_id, "my-project");
        assert_eq!(settings.data_project_id, "my-project");
        assert_eq!(settings.parent(), "projects/my-project");
        assert_eq!(settings.min_likelihood, Likelihood::Unspecified);
        assert_eq!(settings.max_findings, 0);
        assert_eq!(
            settings.info_types,
            ["PHONE_NUMBER", "EMAIL_ADDRESS", "CREDIT_CARD_NUMBER"]
        );
        assert!(settings.include_quote);
    }

    #[test]
    fn inspect_config() {
        let settings = InspectSettings {
            min_likelihood: Likelihood::Possible,
            max_findings: 5,
            info_types: vec!["US_SOCIAL_SECURITY_NUMBER".into()],
            include_quote: false,
            ..InspectSettings::new("my-project")
        };
        let got = settings.inspect_config();
        let want = InspectConfig::new()
            .set_info_types([InfoType::from("US_SOCIAL_SECURITY_NUMBER")])
            .set_min_likelihood(Likelihood::Possible)
            .set_limits(FindingLimits::new().set_max_findings_per_request(5))
            .set_include_quote(false);
        assert_eq!(got, want);
    }

    #[test_case("photo.jpg", BytesType::ImageJpeg)]
    #[test_case("photo.JPEG", BytesType::ImageJpeg)]
    #[test_case("scan.bmp", BytesType::ImageBmp)]
    #[test_case("dir/image.png", BytesType::ImagePng)]
    #[test_case("logo.svg", BytesType::ImageSvg)]
    #[test_case("notes.txt", BytesType::TextUtf8)]
    #[test_case("report.pdf", BytesType::Unspecified)]
    #[test_case("no-extension", BytesType::Unspecified)]
    fn file_bytes_type(path: &str, want: BytesType) {
        assert_eq!(bytes_type(Path::new(path)), want);
    }

    #[tokio::test]
    async fn read_item_success() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "call me at (223) 456-7890")?;
        let item = read_item(&path, bytes_type(&path)).await?;
        let byte_item = item.byte_item().expect("item has bytes");
        assert_eq!(byte_item.r#type, BytesType::TextUtf8);
        assert_eq!(byte_item.data.as_ref(), b"call me at (223) 456-7890");
        Ok(())
    }

    #[tokio::test]
    async fn read_item_missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing.png");
        let err = read_item(&path, BytesType::Image).await.unwrap_err();
        assert!(err.to_string().contains("missing.png"), "{err:?}");
        Ok(())
    }
}
