//! Skill labels detected in session transcripts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A category of collaborative activity inferred from a transcript.
///
/// Declaration order is the order labels are reported in; the derived `Ord`
/// follows it, so a [`SkillSet`] always iterates investigate, trace-flow,
/// plan-implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLabel {
    /// Codebase investigation: hypotheses, evidence, related files.
    Investigate,
    /// Execution or data flow tracing.
    TraceFlow,
    /// Step-by-step implementation planning.
    PlanImplementation,
}

impl SkillLabel {
    const ALL: [Self; 3] = [Self::Investigate, Self::TraceFlow, Self::PlanImplementation];

    /// Returns all labels in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the label as a kebab-case string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Investigate => "investigate",
            Self::TraceFlow => "trace-flow",
            Self::PlanImplementation => "plan-implementation",
        }
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Investigate => "Investigation of code, hypotheses and evidence",
            Self::TraceFlow => "Tracing execution paths and data flow",
            Self::PlanImplementation => "Planning implementation steps",
        }
    }

    /// Parses a label string (case-insensitive, `_` accepted for `-`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "investigate" => Some(Self::Investigate),
            "trace-flow" => Some(Self::TraceFlow),
            "plan-implementation" => Some(Self::PlanImplementation),
            _ => None,
        }
    }
}

impl fmt::Display for SkillLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An unordered set of detected skill labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillSet(BTreeSet<SkillLabel>);

impl SkillSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a label. Returns `false` if it was already present.
    pub fn insert(&mut self, label: SkillLabel) -> bool {
        self.0.insert(label)
    }

    /// Returns true if the label is present.
    #[must_use]
    pub fn contains(&self, label: SkillLabel) -> bool {
        self.0.contains(&label)
    }

    /// Returns true if no label was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of detected labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates labels in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = SkillLabel> + '_ {
        self.0.iter().copied()
    }

    /// Joins the labels in declaration order, e.g. `investigate, trace-flow`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<SkillLabel> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillLabel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(", "))
    }
}
