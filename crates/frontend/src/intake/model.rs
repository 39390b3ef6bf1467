//! File intake - data model and batch validation

use crate::shared::notify::NoticeIcon;

/// A file accepted by the intake widget, not yet uploaded.
///
/// Held in a parent-owned ordered list; has no backend identity
/// until the bulk upload runs.
#[derive(Clone)]
pub struct FileData {
    pub name: String,
    pub file: web_sys::File,
    pub mime_type: String,
    pub size: f64,
}

impl FileData {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size(),
            file,
        }
    }
}

/// Why a whole candidate batch was rejected. Acceptance is all-or-nothing:
/// a rejected batch adds zero files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRejection {
    /// The accepted list already holds the configured maximum.
    LimitReached { max: usize },
    /// At least one candidate has a disallowed MIME type.
    InvalidFormat { allowed: Vec<String> },
    /// The single drop/select action brought more files than allowed.
    TooManyAtOnce { max: usize },
}

impl BatchRejection {
    pub fn icon(&self) -> NoticeIcon {
        match self {
            BatchRejection::LimitReached { .. } => NoticeIcon::Warning,
            BatchRejection::InvalidFormat { .. } => NoticeIcon::Warning,
            BatchRejection::TooManyAtOnce { .. } => NoticeIcon::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BatchRejection::LimitReached { .. } => "Maximum Files",
            BatchRejection::InvalidFormat { .. } => "Invalid Media",
            BatchRejection::TooManyAtOnce { .. } => "Error",
        }
    }

    pub fn text(&self) -> String {
        match self {
            BatchRejection::LimitReached { max } => {
                format!("Only {} files can be uploaded", max)
            }
            BatchRejection::InvalidFormat { allowed } => format!(
                "Invalid file format. Please only upload {}",
                allowed.join(", ").to_uppercase()
            ),
            BatchRejection::TooManyAtOnce { max } => format!(
                "Only {} file{} can be uploaded at a time",
                max,
                if *max != 1 { "s" } else { "" }
            ),
        }
    }
}

/// Validate one candidate batch against the accepted list.
///
/// Rules apply in order: accumulated limit, MIME format, per-action count.
/// A MIME type is allowed iff it ends with "/{format}" for one of the
/// configured formats.
pub fn validate_batch(
    accepted_len: usize,
    batch_mime_types: &[String],
    count: usize,
    formats: &[String],
) -> Result<(), BatchRejection> {
    let all_files_valid = batch_mime_types.iter().all(|mime| {
        formats
            .iter()
            .any(|format| mime.ends_with(&format!("/{}", format)))
    });

    if accepted_len >= count {
        return Err(BatchRejection::LimitReached { max: count });
    }
    if !all_files_valid {
        return Err(BatchRejection::InvalidFormat {
            allowed: formats.to_vec(),
        });
    }
    if count < batch_mime_types.len() {
        return Err(BatchRejection::TooManyAtOnce { max: count });
    }

    Ok(())
}

/// Remove the element at `index`, preserving the relative order of the
/// rest. Out-of-range indices are ignored.
pub fn remove_at<T>(list: &mut Vec<T>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_formats() -> Vec<String> {
        vec!["pdf".to_string()]
    }

    fn mimes(types: &[&str]) -> Vec<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_accepts_pdf_batch() {
        let batch = mimes(&["application/pdf"]);
        assert_eq!(validate_batch(0, &batch, 10, &pdf_formats()), Ok(()));
    }

    #[test]
    fn test_rejects_batch_when_limit_reached() {
        let batch = mimes(&["application/pdf"]);
        assert_eq!(
            validate_batch(10, &batch, 10, &pdf_formats()),
            Err(BatchRejection::LimitReached { max: 10 })
        );
    }

    #[test]
    fn test_rejects_whole_batch_on_single_bad_mime() {
        let batch = mimes(&["application/pdf", "image/png"]);
        assert_eq!(
            validate_batch(0, &batch, 10, &pdf_formats()),
            Err(BatchRejection::InvalidFormat {
                allowed: pdf_formats()
            })
        );
    }

    #[test]
    fn test_rejects_oversized_batch_before_any_acceptance() {
        let batch = mimes(&["application/pdf"; 11]);
        assert_eq!(
            validate_batch(0, &batch, 10, &pdf_formats()),
            Err(BatchRejection::TooManyAtOnce { max: 10 })
        );
    }

    #[test]
    fn test_limit_check_precedes_format_check() {
        let batch = mimes(&["image/png"]);
        assert_eq!(
            validate_batch(10, &batch, 10, &pdf_formats()),
            Err(BatchRejection::LimitReached { max: 10 })
        );
    }

    #[test]
    fn test_mime_suffix_match() {
        // Only the "/{format}" suffix counts, not the full type string.
        let ok = mimes(&["application/pdf", "text/pdf"]);
        assert_eq!(validate_batch(0, &ok, 10, &pdf_formats()), Ok(()));

        let bad = mimes(&["application/pdfx"]);
        assert!(validate_batch(0, &bad, 10, &pdf_formats()).is_err());
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut list = vec!["a", "b", "c", "d"];
        remove_at(&mut list, 1);
        assert_eq!(list, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut list = vec!["a"];
        remove_at(&mut list, 5);
        assert_eq!(list, vec!["a"]);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            BatchRejection::LimitReached { max: 10 }.text(),
            "Only 10 files can be uploaded"
        );
        assert_eq!(
            BatchRejection::InvalidFormat {
                allowed: pdf_formats()
            }
            .text(),
            "Invalid file format. Please only upload PDF"
        );
        assert_eq!(
            BatchRejection::TooManyAtOnce { max: 10 }.text(),
            "Only 10 files can be uploaded at a time"
        );
        assert_eq!(
            BatchRejection::TooManyAtOnce { max: 1 }.text(),
            "Only 1 file can be uploaded at a time"
        );
        assert_eq!(
            BatchRejection::TooManyAtOnce { max: 10 }.icon(),
            NoticeIcon::Error
        );
        assert_eq!(
            BatchRejection::LimitReached { max: 10 }.icon(),
            NoticeIcon::Warning
        );
    }
}
