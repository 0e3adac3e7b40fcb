use serde::Deserialize;
use std::collections::BTreeMap;

/// Aggregate lead statistics for the head-office dashboard.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: u64,
    pub qualified_leads: u64,
    pub unqualified_leads: u64,
    pub lost_leads: u64,
    pub pending_leads: u64,
    pub conversion_rate: f64,
    #[serde(default)]
    pub source_distribution: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::DashboardStats;

    #[test]
    fn stats_parse_with_source_distribution() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{
                "totalLeads": 120,
                "qualifiedLeads": 40,
                "unqualifiedLeads": 25,
                "lostLeads": 10,
                "pendingLeads": 45,
                "conversionRate": 33.3,
                "sourceDistribution": {"WALK_IN": 60, "WEBSITE": 60}
            }"#,
        )
        .expect("stats should parse");

        assert_eq!(stats.total_leads, 120);
        assert_eq!(stats.source_distribution.get("WALK_IN"), Some(&60));
    }

    #[test]
    fn stats_parse_without_source_distribution() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{
                "totalLeads": 0,
                "qualifiedLeads": 0,
                "unqualifiedLeads": 0,
                "lostLeads": 0,
                "pendingLeads": 0,
                "conversionRate": 0.0
            }"#,
        )
        .expect("stats should parse");

        assert!(stats.source_distribution.is_empty());
    }
}
