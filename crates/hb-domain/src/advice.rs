//! Advice statements produced from a budget snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How urgently a piece of advice should be presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Positive,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Positive => "positive",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

/// Names the rule that produced an advice line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    Overspending,
    LimitedSavings,
    HealthyBuffer,
    CategoryConcentration,
    EssentialRatio,
    EmergencyFund,
    PlanningAhead,
    Disclaimer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub severity: Severity,
    pub message: String,
}

impl Advice {
    pub fn new(kind: AdviceKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
