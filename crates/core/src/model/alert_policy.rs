use serde::{Deserialize, Serialize};

/// A metric alert policy
///
/// Flag and numeric fields are strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "alert_policy", rename_all = "camelCase", default)]
pub struct AlertPolicy {
    pub policy_name: String,
    pub metric_type: String,
    pub metric_name: String,
    pub created_by: String,
    pub is_enabled: String,
    pub is_per_instance_metric: String,
    pub period: String,
    pub period_units: String,
    pub datapoints_to_consider: String,
    pub datapoints_to_alert: String,
    pub statistic: String,
    pub operator: String,
    pub condition: Condition,
}

/// Threshold that raises an alert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Condition {
    pub threshold_units: String,
    pub threshold_value: String,
    pub severity_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertPolicies {
    #[serde(rename = "alert_policies")]
    pub items: Vec<AlertPolicy>,

    #[serde(rename = "MaxPolicies")]
    pub max_policies: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_marker: String,

    #[serde(rename = "Filter", skip_serializing_if = "String::is_empty")]
    pub filter: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_json() {
        let policies: AlertPolicies = serde_json::from_str(
            r#"{"alert_policies":[{"policyName":"testPolicy","metricType":"Capacity","metricName":"Used Capacity",
                "isEnabled":"true","period":"1","periodUnits":"Hours",
                "condition":{"thresholdUnits":"%","thresholdValue":"80","severityType":"WARNING"}}],
                "MaxPolicies":100}"#,
        )
        .unwrap();
        assert_eq!(policies.items.len(), 1);
        let policy = &policies.items[0];
        assert_eq!(policy.policy_name, "testPolicy");
        assert_eq!(policy.period_units, "Hours");
        assert_eq!(policy.condition.severity_type, "WARNING");
        assert_eq!(policies.max_policies, 100);
    }

    #[test]
    fn test_policy_serializes_camel_case() {
        let policy = AlertPolicy {
            policy_name: "p1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["policyName"], "p1");
        assert!(json["condition"]["thresholdValue"].is_string());
    }
}
