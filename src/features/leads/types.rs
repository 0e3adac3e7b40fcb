//! Lead payloads exchanged with the backend. Field names follow the
//! backend's camelCase JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Qualified,
    Unqualified,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Qualified,
        LeadStatus::Unqualified,
        LeadStatus::Lost,
    ];

    /// Wire form, also used as the `?status=` filter value.
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Qualified => "QUALIFIED",
            LeadStatus::Unqualified => "UNQUALIFIED",
            LeadStatus::Lost => "LOST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "NEW" => Some(LeadStatus::New),
            "QUALIFIED" => Some(LeadStatus::Qualified),
            "UNQUALIFIED" => Some(LeadStatus::Unqualified),
            "LOST" => Some(LeadStatus::Lost),
            _ => None,
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: u64,
    pub contact_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub government_id: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub model_name: Option<String>,
    pub lead_source: Option<String>,
    pub lead_mode: Option<String>,
    pub follow_up_date: Option<String>,
    pub status: LeadStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl Lead {
    /// Display name for lists and headers.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.trim().is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Editable lead fields sent on create and update. Optional fields are
/// omitted when unset so the backend keeps its defaults.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub contact_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

/// One recorded field change on a lead.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadModification {
    pub id: u64,
    pub lead_id: u64,
    pub modified_field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub modified_by: String,
    pub modified_at: String,
}

#[cfg(test)]
mod tests {
    use super::{Lead, LeadDraft, LeadStatus};

    #[test]
    fn lead_status_round_trips_wire_names() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LeadStatus::parse("PENDING"), None);
    }

    #[test]
    fn lead_parses_backend_camel_case_payload() {
        let lead: Lead = serde_json::from_str(
            r#"{
                "id": 7,
                "contactNumber": "9876543210",
                "firstName": "Asha",
                "lastName": "Patil",
                "governmentId": "MH-04-1234",
                "email": "asha@example.com",
                "city": "Pune",
                "modelName": "Splendor",
                "leadSource": "WALK_IN",
                "leadMode": "ONLINE",
                "status": "QUALIFIED",
                "createdAt": "2024-05-01T10:00:00",
                "updatedAt": "2024-05-02T09:30:00"
            }"#,
        )
        .expect("lead should parse");

        assert_eq!(lead.id, 7);
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert_eq!(lead.full_name(), "Asha Patil");
        assert_eq!(lead.government_id.as_deref(), Some("MH-04-1234"));
        assert_eq!(lead.lead_mode.as_deref(), Some("ONLINE"));
    }

    #[test]
    fn full_name_skips_blank_last_name() {
        let lead: Lead = serde_json::from_str(
            r#"{
                "id": 1,
                "contactNumber": "9876543210",
                "firstName": "Asha",
                "lastName": "  ",
                "status": "NEW",
                "createdAt": "2024-05-01T10:00:00",
                "updatedAt": "2024-05-01T10:00:00"
            }"#,
        )
        .expect("lead should parse");

        assert_eq!(lead.full_name(), "Asha");
    }

    #[test]
    fn draft_serializes_camel_case_and_omits_unset_fields() {
        let draft = LeadDraft {
            contact_number: "9876543210".to_string(),
            first_name: "Asha".to_string(),
            status: Some(LeadStatus::New),
            ..LeadDraft::default()
        };
        let json = serde_json::to_value(&draft).expect("draft should serialize");

        assert_eq!(json["contactNumber"], "9876543210");
        assert_eq!(json["status"], "NEW");
        assert!(json.get("lastName").is_none());
        assert!(json.get("followUpDate").is_none());
    }
}
