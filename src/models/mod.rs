//! Data models for hook inputs and results.

mod instance;
mod skill;
mod transcript;

pub use instance::{AllocationOutcome, InstanceDirectory};
pub use skill::{SkillLabel, SkillSet};
pub use transcript::{Message, Role, parse_transcript};
