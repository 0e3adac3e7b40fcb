use serde::Deserialize;

/// Outcome of a bulk lead import.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub total_records: u64,
    pub successful_records: u64,
    pub failed_records: u64,
}

#[cfg(test)]
mod tests {
    use super::UploadSummary;

    #[test]
    fn summary_parses_import_counts() {
        let summary: UploadSummary = serde_json::from_str(
            r#"{
                "success": true,
                "message": "Imported with 2 failures",
                "totalRecords": 50,
                "successfulRecords": 48,
                "failedRecords": 2
            }"#,
        )
        .expect("summary should parse");

        assert_eq!(summary.total_records, 50);
        assert_eq!(summary.failed_records, 2);
    }
}
