use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_LIBRARY_API_URL: &str = "https://thuvien.truongso.vn/web/ebooks";
const DEFAULT_DOWNLOAD_PROXY_URL: &str = "https://thuvien.truongso.vn/web/download-pdf";
const DEFAULT_DOWNLOAD_SERVICE_URL: &str = "https://api2dev.arito.vn/api/v1/DownloadFile0";
const HTTP_USER_AGENT: &str = concat!("Folio/", env!("CARGO_PKG_VERSION"));
const METADATA_TIMEOUT: Duration = Duration::from_secs(15);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Failure classes surfaced by the reading view. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The backend rejected the session token. The only class that ends the
    /// session; plain transport failures do not.
    Unauthorized,
    /// Metadata came back without a matching book. Carries the backend's
    /// message when it sent one.
    NotFound(Option<String>),
    Transport(String),
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "library rejected the session token"),
            Self::NotFound(Some(message)) => write!(f, "book not found: {message}"),
            Self::NotFound(None) => write!(f, "book not found"),
            Self::Transport(message) => write!(f, "library request failed: {message}"),
        }
    }
}

impl std::error::Error for LibraryError {}

#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Identifier of the attached PDF on the download service. Empty on
    /// records without an attachment.
    pub file_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EbooksResponse {
    #[serde(default)]
    code: i64,
    #[serde(default, rename = "messageText")]
    message_text: Option<String>,
    #[serde(default)]
    data: Vec<RawBookRecord>,
}

#[derive(Debug, Deserialize)]
struct RawBookRecord {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    text: String,
    #[serde(default)]
    tac_gia: String,
    #[serde(default)]
    file_id: Option<String>,
}

fn library_api_url() -> String {
    env_url("FOLIO_LIBRARY_API_URL", DEFAULT_LIBRARY_API_URL)
}

fn download_proxy_url() -> String {
    env_url("FOLIO_DOWNLOAD_PROXY_URL", DEFAULT_DOWNLOAD_PROXY_URL)
}

fn download_service_url() -> String {
    env_url("FOLIO_DOWNLOAD_SERVICE_URL", DEFAULT_DOWNLOAD_SERVICE_URL)
}

fn env_url(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// The per-session download authorization: the third dot-separated segment
/// of the access token. Every file-serving endpoint of the backend expects
/// this exact fragment, so the slicing must not change.
pub fn signature_fragment(access_token: &str) -> Option<&str> {
    access_token.split('.').nth(2).filter(|s| !s.is_empty())
}

/// Build the signed URL for a book's PDF asset. The byte layout
/// `<service>/<file_id>/<signature>` wrapped in the download proxy matches
/// what the backend serves and must be preserved bit-for-bit.
pub fn asset_url(file_id: &str, access_token: &str) -> Option<String> {
    let signature = signature_fragment(access_token)?;
    Some(format!(
        "{}?pdfUrl={}/{}/{}",
        download_proxy_url(),
        download_service_url(),
        file_id,
        signature
    ))
}

/// One metadata request per book. `code == 200` with a non-empty data array
/// is success; anything else maps onto the error taxonomy.
pub fn fetch_book(book_id: &str, access_token: &str) -> Result<BookRecord, LibraryError> {
    let client = Client::builder()
        .timeout(METADATA_TIMEOUT)
        .user_agent(HTTP_USER_AGENT)
        .build()
        .map_err(|err| LibraryError::Transport(err.to_string()))?;

    let payload = serde_json::json!({
        "accessToken": access_token,
        "memvars": {
            "loai_sach": "",
            "id": book_id,
            "pageIndex": 0,
        },
    });

    let response = client
        .post(library_api_url())
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .json(&payload)
        .send()
        .map_err(|err| LibraryError::Transport(err.to_string()))?;

    if matches!(
        response.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) {
        return Err(LibraryError::Unauthorized);
    }

    let decoded = response
        .json::<EbooksResponse>()
        .map_err(|err| LibraryError::Transport(err.to_string()))?;

    interpret_metadata_response(decoded)
}

fn interpret_metadata_response(response: EbooksResponse) -> Result<BookRecord, LibraryError> {
    if response.code != 200 || response.data.is_empty() {
        return Err(LibraryError::NotFound(
            response.message_text.filter(|m| !m.is_empty()),
        ));
    }

    let Some(raw) = response.data.into_iter().next() else {
        return Err(LibraryError::NotFound(None));
    };
    Ok(BookRecord {
        id: raw.id,
        title: raw.text,
        author: raw.tac_gia,
        file_id: raw.file_id.filter(|id| !id.is_empty()),
    })
}

/// Fetch the PDF asset into `destination`. The file is written whole before
/// being handed to the renderer, so a failed download never leaves a
/// half-parsed document behind.
pub fn download_asset(url: &str, destination: &Path) -> Result<(), LibraryError> {
    let client = Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .user_agent(HTTP_USER_AGENT)
        .build()
        .map_err(|err| LibraryError::Transport(err.to_string()))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|err| LibraryError::Transport(err.to_string()))?;

    if matches!(
        response.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) {
        return Err(LibraryError::Unauthorized);
    }
    if !response.status().is_success() {
        return Err(LibraryError::Transport(format!(
            "download returned {}",
            response.status()
        )));
    }

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|err| LibraryError::Transport(err.to_string()))?;
    }

    let tmp_path = destination.with_extension("part");
    let mut file = std::fs::File::create(&tmp_path)
        .map_err(|err| LibraryError::Transport(err.to_string()))?;
    response
        .copy_to(&mut file)
        .map_err(|err| LibraryError::Transport(err.to_string()))?;
    drop(file);

    std::fs::rename(&tmp_path, destination)
        .map_err(|err| LibraryError::Transport(err.to_string()))?;
    Ok(())
}

/// Local cache location for a downloaded asset.
pub fn asset_cache_path(file_id: &str) -> PathBuf {
    let file_name = format!("{}.pdf", sanitize_cache_name(file_id));

    #[cfg(target_os = "windows")]
    if let Some(app_data) = std::env::var_os("APPDATA") {
        return PathBuf::from(app_data)
            .join("Folio")
            .join("cache")
            .join(file_name);
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".folio")
            .join("cache")
            .join(file_name);
    }

    std::env::temp_dir().join("folio-cache").join(file_name)
}

fn sanitize_cache_name(file_id: &str) -> String {
    file_id
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "header.payload.signature-xyz";

    #[test]
    fn signature_is_third_token_segment() {
        assert_eq!(signature_fragment(TOKEN), Some("signature-xyz"));
        assert_eq!(signature_fragment("a.b.c.d"), Some("c"));
        assert_eq!(signature_fragment("no-dots"), None);
        assert_eq!(signature_fragment("one.two"), None);
        assert_eq!(signature_fragment("a.b."), None);
    }

    #[test]
    fn asset_url_layout_is_exact() {
        let url = asset_url("F123", TOKEN).expect("url");
        assert_eq!(
            url,
            "https://thuvien.truongso.vn/web/download-pdf?pdfUrl=https://api2dev.arito.vn/api/v1/DownloadFile0/F123/signature-xyz"
        );
    }

    #[test]
    fn asset_url_requires_a_signature() {
        assert_eq!(asset_url("F123", "broken-token"), None);
    }

    #[test]
    fn decodes_successful_metadata() {
        let raw = r#"{
            "code": 200,
            "data": [
                { "id": 7, "text": "Dế Mèn phiêu lưu ký", "tac_gia": "Tô Hoài", "file_id": "F-9" }
            ]
        }"#;
        let response: EbooksResponse = serde_json::from_str(raw).unwrap();
        let book = interpret_metadata_response(response).unwrap();

        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Dế Mèn phiêu lưu ký");
        assert_eq!(book.author, "Tô Hoài");
        assert_eq!(book.file_id.as_deref(), Some("F-9"));
    }

    #[test]
    fn missing_attachment_decodes_to_none() {
        let raw = r#"{ "code": 200, "data": [ { "id": 1, "text": "t", "tac_gia": "a", "file_id": "" } ] }"#;
        let response: EbooksResponse = serde_json::from_str(raw).unwrap();
        let book = interpret_metadata_response(response).unwrap();
        assert_eq!(book.file_id, None);
    }

    #[test]
    fn non_200_code_is_not_found_with_backend_message() {
        let raw = r#"{ "code": 404, "messageText": "khong tim thay", "data": [] }"#;
        let response: EbooksResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            interpret_metadata_response(response),
            Err(LibraryError::NotFound(Some("khong tim thay".to_string())))
        );
    }

    #[test]
    fn empty_data_is_not_found_even_with_code_200() {
        let raw = r#"{ "code": 200, "data": [] }"#;
        let response: EbooksResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            interpret_metadata_response(response),
            Err(LibraryError::NotFound(None))
        );
    }

    #[test]
    fn cache_names_are_filesystem_safe() {
        assert_eq!(sanitize_cache_name("F-9_x.y"), "F-9_x.y");
        assert_eq!(sanitize_cache_name("a/b\\c:d"), "a_b_c_d");
    }
}
