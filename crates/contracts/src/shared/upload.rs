use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Per-file cap for design-reference uploads.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("File {name} is too large. Maximum size is 10MB.")]
    TooLarge { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Pdf,
    Document,
}

impl FileKind {
    /// Classify by MIME type; anything that is neither an image nor a
    /// PDF counts as a generic document.
    pub fn from_mime(mime: &str) -> FileKind {
        if mime.starts_with("image/") {
            FileKind::Image
        } else if mime == "application/pdf" {
            FileKind::Pdf
        } else {
            FileKind::Document
        }
    }
}

/// Metadata for a design-reference attachment held in the draft. The
/// binary payload itself stays with the browser `File`; only images get
/// a data-URL preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub size: String,
    pub kind: FileKind,
    #[serde(default)]
    pub preview: Option<String>,
}

impl UploadedFile {
    pub fn new(name: String, size_bytes: u64, mime: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            size: format_size(size_bytes),
            kind: FileKind::from_mime(mime),
            preview: None,
        }
    }
}

/// Reject files over the cap with a per-file message; the caller keeps
/// processing the rest of the batch.
pub fn check_size(name: &str, size_bytes: u64) -> Result<(), UploadError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Human-readable size, two decimals with trailing zeros trimmed
/// ("1.5 MB", "1 KB", "0 Bytes").
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mime() {
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_mime("image/jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("text/plain"), FileKind::Document);
        assert_eq!(FileKind::from_mime(""), FileKind::Document);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
    }

    #[test]
    fn test_size_cap_rejects_only_oversized_files() {
        let eleven_mb = 11 * 1024 * 1024;
        let nine_mb = 9 * 1024 * 1024;

        assert_eq!(
            check_size("huge.psd", eleven_mb),
            Err(UploadError::TooLarge {
                name: "huge.psd".to_string()
            })
        );
        assert_eq!(check_size("sketch.png", nine_mb), Ok(()));
        // The cap is exclusive: exactly 10 MB still passes.
        assert_eq!(check_size("edge.pdf", MAX_UPLOAD_BYTES), Ok(()));
    }

    #[test]
    fn test_rejection_message_names_the_file() {
        let err = check_size("huge.psd", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File huge.psd is too large. Maximum size is 10MB."
        );
    }

    #[test]
    fn test_uploaded_file_ids_are_distinct() {
        let a = UploadedFile::new("a.png".to_string(), 10, "image/png");
        let b = UploadedFile::new("a.png".to_string(), 10, "image/png");
        assert_ne!(a.id, b.id);
    }
}
