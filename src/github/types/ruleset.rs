use serde::{Deserialize, Serialize};

/// Ruleset payload of `gh api repos/{owner}/{repo}/rulesets/{id}`.
#[derive(Deserialize, Serialize, Debug)]
pub struct Ruleset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub enforcement: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Rule {
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

impl Ruleset {
    /// Rule type names in declaration order.
    pub fn rule_types(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.rule_type.as_str()).collect()
    }

    /// Whether a rule of the given type is present.
    pub fn has_rule(&self, rule_type: &str) -> bool {
        self.rules.iter().any(|r| r.rule_type == rule_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_rest_payload() {
        let payload = r#"{
            "id": 9523549,
            "name": "Main Branch Protection",
            "target": "branch",
            "enforcement": "active",
            "rules": [
                {"type": "deletion"},
                {"type": "non_fast_forward"},
                {"type": "required_status_checks", "parameters": {"required_status_checks": []}}
            ]
        }"#;
        let ruleset: Ruleset = serde_json::from_str(payload).unwrap();
        assert_eq!(ruleset.id, 9523549);
        assert_eq!(ruleset.name, "Main Branch Protection");
        assert_eq!(
            ruleset.rule_types(),
            vec!["deletion", "non_fast_forward", "required_status_checks"]
        );
        assert!(ruleset.has_rule("required_status_checks"));
        assert!(!ruleset.has_rule("pull_request"));
    }

    #[test]
    fn test_rules_default_to_empty() {
        let ruleset: Ruleset = serde_json::from_str(r#"{"id": 1, "name": "bare"}"#).unwrap();
        assert!(ruleset.rules.is_empty());
        assert!(!ruleset.has_rule("required_status_checks"));
    }
}
