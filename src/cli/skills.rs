//! CLI command for listing evolving skills.

use crate::hooks::KeywordTaxonomy;
use crate::models::SkillLabel;
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;

/// Information about a skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillInfo {
    /// Skill label.
    pub skill: String,
    /// Description of the skill.
    pub description: String,
    /// Phrases that detect the skill in a transcript.
    pub triggers: Vec<String>,
}

impl SkillInfo {
    fn new(label: SkillLabel, triggers: &[String]) -> Self {
        Self {
            skill: label.to_string(),
            description: label.description().to_string(),
            triggers: triggers.to_vec(),
        }
    }
}

/// Returns information for every skill in the taxonomy, in label order.
#[must_use]
pub fn get_all_skills(taxonomy: &KeywordTaxonomy) -> Vec<SkillInfo> {
    SkillLabel::all()
        .iter()
        .map(|&label| SkillInfo::new(label, taxonomy.triggers(label)))
        .collect()
}

/// Output format for the skills command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillsOutputFormat {
    /// Table format (default).
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl FromStr for SkillsOutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        })
    }
}

/// Writes skills as a table to the given writer.
///
/// Trigger phrases are listed only when `verbose` is set.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_table<W: Write>(writer: &mut W, skills: &[SkillInfo], verbose: bool) -> io::Result<()> {
    if verbose {
        writeln!(writer, "{:<20}{:<36}TRIGGERS", "SKILL", "DESCRIPTION")?;
        for skill in skills {
            writeln!(
                writer,
                "{:<20}{:<36}{}",
                skill.skill,
                skill.description,
                skill.triggers.join(", ")
            )?;
        }
    } else {
        writeln!(writer, "{:<20}DESCRIPTION", "SKILL")?;
        for skill in skills {
            writeln!(writer, "{:<20}{}", skill.skill, skill.description)?;
        }
    }
    Ok(())
}

/// Writes skills as JSON to the given writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, skills: &[SkillInfo]) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(skills).map_err(|e| crate::Error::OperationFailed {
        operation: "serialize_skills".to_string(),
        cause: e.to_string(),
    })?;
    writeln!(writer, "{json}").map_err(|e| crate::Error::OperationFailed {
        operation: "write_skills".to_string(),
        cause: e.to_string(),
    })
}

/// Skills command.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn cmd_skills(
    taxonomy: &KeywordTaxonomy,
    format: SkillsOutputFormat,
    verbose: bool,
) -> crate::Result<()> {
    let skills = get_all_skills(taxonomy);
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        SkillsOutputFormat::Table => {
            write_table(&mut handle, &skills, verbose).map_err(|e| crate::Error::OperationFailed {
                operation: "write_skills".to_string(),
                cause: e.to_string(),
            })
        },
        SkillsOutputFormat::Json => write_json(&mut handle, &skills),
    }
}
