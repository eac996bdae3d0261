//! Keyword-based skill usage detection.
//!
//! A [`KeywordTaxonomy`] maps each [`SkillLabel`] to trigger phrases. A label
//! is detected when any of its phrases occurs anywhere in the transcript,
//! ignoring case. There is no word-boundary or regex matching, so `approach`
//! also fires on `approaches`.

use super::skill_patterns::builtin_triggers;
use crate::models::{Message, SkillLabel, SkillSet};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BUILTIN_TAXONOMY: LazyLock<KeywordTaxonomy> = LazyLock::new(|| KeywordTaxonomy {
    triggers: SkillLabel::all()
        .iter()
        .map(|label| {
            let phrases = builtin_triggers(*label)
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect();
            (*label, phrases)
        })
        .collect(),
});

/// Mapping from skill label to lowercase trigger phrases.
///
/// Every label has at least one non-blank phrase; constructors reject
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTaxonomy {
    triggers: BTreeMap<SkillLabel, Vec<String>>,
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl KeywordTaxonomy {
    /// Builds a taxonomy that must cover every label.
    ///
    /// Phrases are lowercased and trimmed; duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a label is missing or has no
    /// non-blank phrase.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SkillLabel, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut triggers = BTreeMap::new();
        for (label, phrases) in entries {
            triggers.insert(label, normalize_phrases(label, &phrases)?);
        }

        if let Some(missing) = SkillLabel::all()
            .iter()
            .find(|label| !triggers.contains_key(*label))
        {
            return Err(Error::InvalidInput(format!(
                "no trigger phrases for skill '{missing}'"
            )));
        }

        Ok(Self { triggers })
    }

    /// Returns the built-in taxonomy.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_TAXONOMY
    }

    /// Replaces the phrases of one label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `phrases` has no non-blank entry.
    pub fn with_triggers<S: AsRef<str>>(mut self, label: SkillLabel, phrases: &[S]) -> Result<Self> {
        let normalized = normalize_phrases(label, phrases)?;
        self.triggers.insert(label, normalized);
        Ok(self)
    }

    /// Returns the phrases for a label.
    #[must_use]
    pub fn triggers(&self, label: SkillLabel) -> &[String] {
        self.triggers.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates labels and their phrases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillLabel, &[String])> {
        self.triggers
            .iter()
            .map(|(label, phrases)| (*label, phrases.as_slice()))
    }

    /// Returns the labels whose phrases occur in any of the lowercase texts.
    #[must_use]
    pub fn detect<T: AsRef<str>>(&self, texts: &[T]) -> SkillSet {
        self.iter()
            .filter(|(_, phrases)| {
                phrases.iter().any(|phrase| {
                    texts
                        .iter()
                        .any(|text| text.as_ref().contains(phrase.as_str()))
                })
            })
            .map(|(label, _)| label)
            .collect()
    }
}

fn normalize_phrases<S: AsRef<str>>(label: SkillLabel, phrases: &[S]) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        let phrase = phrase.as_ref().trim().to_lowercase();
        if !phrase.is_empty() && !normalized.contains(&phrase) {
            normalized.push(phrase);
        }
    }

    if normalized.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no trigger phrases for skill '{label}'"
        )));
    }
    Ok(normalized)
}

/// Classifies a transcript into the skills it shows evidence of.
///
/// Each message is searched on its own, so the result does not depend on
/// message order. An empty transcript yields an empty set.
#[must_use]
pub fn classify(transcript: &[Message], taxonomy: &KeywordTaxonomy) -> SkillSet {
    let texts: Vec<String> = transcript.iter().map(Message::search_text).collect();
    taxonomy.detect(&texts)
}

/// Builds the advisory shown to the user, or `None` if nothing was detected.
#[must_use]
pub fn compose_advisory(skills: &SkillSet) -> Option<String> {
    if skills.is_empty() {
        return None;
    }

    Some(format!(
        "\n💡 **Memory Update Opportunity**\n\
         \n\
         Evolving skills used: {skills}\n\
         \n\
         Consider saving learnings with:\n\
         - `memory create TYPE NAME \"observation\"` - Create new knowledge entity\n\
         - `memory add TYPE NAME \"observation\"` - Add to existing entity\n\
         \n\
         Types: project, domain, pattern, flow, risk\n\
         \n\
         Or say \"update memory\" to review and save discoveries.\n\
         \n\
         To skip: just continue with your next request.\n"
    ))
}
