//! Bulk upload response type.

use serde::{Deserialize, Serialize};

/// Response of the bulk upload endpoint: one stored filename per
/// uploaded file, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUploadResponse {
    pub filenames: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let resp: BulkUploadResponse =
            serde_json::from_str(r#"{"filenames": ["a.pdf", "b.pdf"]}"#).unwrap();
        assert_eq!(resp.filenames, vec!["a.pdf", "b.pdf"]);
    }
}
