//! Built-in skill trigger phrases.
//!
//! Static data for keyword-based skill detection. Phrases are matched as
//! plain lowercase substrings of the transcript.

use crate::models::SkillLabel;

/// Phrases that indicate codebase investigation.
pub const INVESTIGATE_TRIGGERS: &[&str] = &[
    "investigation_report",
    "investigation report",
    "investigating",
    "found files",
    "related files",
    "hypothesis",
    "evidence",
];

/// Phrases that indicate execution or data flow tracing.
pub const TRACE_FLOW_TRIGGERS: &[&str] = &[
    "flow_report",
    "flow report",
    "tracing",
    "execution path",
    "data flow",
    "call chain",
];

/// Phrases that indicate implementation planning.
pub const PLAN_IMPLEMENTATION_TRIGGERS: &[&str] = &[
    "plan.md",
    "implementation plan",
    "planning",
    "steps to implement",
    "approach",
];

/// Returns the built-in trigger phrases for a label.
#[must_use]
pub const fn builtin_triggers(label: SkillLabel) -> &'static [&'static str] {
    match label {
        SkillLabel::Investigate => INVESTIGATE_TRIGGERS,
        SkillLabel::TraceFlow => TRACE_FLOW_TRIGGERS,
        SkillLabel::PlanImplementation => PLAN_IMPLEMENTATION_TRIGGERS,
    }
}
