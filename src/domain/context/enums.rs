//! Closed vocabularies of the context record format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Proposed,
    Active,
    Deprecated,
    Retired,
}

impl PolicyStatus {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Proposed => "proposed",
            PolicyStatus::Active => "active",
            PolicyStatus::Deprecated => "deprecated",
            PolicyStatus::Retired => "retired",
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Governance area a policy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Governance,
    Security,
    Compliance,
    Architectural,
    Operational,
    Financial,
}

impl PolicyType {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Governance => "governance",
            PolicyType::Security => "security",
            PolicyType::Compliance => "compliance",
            PolicyType::Architectural => "architectural",
            PolicyType::Operational => "operational",
            PolicyType::Financial => "financial",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How strongly a policy binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
    Mandatory,
    Recommended,
    Advisory,
}

impl Enforcement {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Enforcement::Mandatory => "mandatory",
            Enforcement::Recommended => "recommended",
            Enforcement::Advisory => "advisory",
        }
    }
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category tag of a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactType {
    Contract,
    Budget,
    Timeline,
    Constraint,
    Metric,
    Event,
    Status,
}

impl FactType {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FactType::Contract => "contract",
            FactType::Budget => "budget",
            FactType::Timeline => "timeline",
            FactType::Constraint => "constraint",
            FactType::Metric => "metric",
            FactType::Event => "event",
            FactType::Status => "status",
        }
    }
}

impl fmt::Display for FactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_status_round_trips_through_json() {
        let json = serde_json::to_string(&PolicyStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let parsed: PolicyStatus = serde_json::from_str("\"deprecated\"").unwrap();
        assert_eq!(parsed, PolicyStatus::Deprecated);
    }

    #[test]
    fn policy_type_round_trips_through_json() {
        let json = serde_json::to_string(&PolicyType::Architectural).unwrap();
        assert_eq!(json, "\"architectural\"");

        let parsed: PolicyType = serde_json::from_str("\"governance\"").unwrap();
        assert_eq!(parsed, PolicyType::Governance);
    }

    #[test]
    fn enforcement_round_trips_through_json() {
        let json = serde_json::to_string(&Enforcement::Mandatory).unwrap();
        assert_eq!(json, "\"mandatory\"");

        let parsed: Enforcement = serde_json::from_str("\"advisory\"").unwrap();
        assert_eq!(parsed, Enforcement::Advisory);
    }

    #[test]
    fn fact_type_round_trips_through_json() {
        let json = serde_json::to_string(&FactType::Budget).unwrap();
        assert_eq!(json, "\"budget\"");

        let parsed: FactType = serde_json::from_str("\"timeline\"").unwrap();
        assert_eq!(parsed, FactType::Timeline);
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(format!("{}", PolicyStatus::Retired), "retired");
        assert_eq!(format!("{}", PolicyType::Compliance), "compliance");
        assert_eq!(format!("{}", Enforcement::Recommended), "recommended");
        assert_eq!(format!("{}", FactType::Metric), "metric");
    }
}
