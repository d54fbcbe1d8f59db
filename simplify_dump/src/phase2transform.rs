use libsimpledict::{RawEntry, Sense};

use crate::error::{excerpt, SimplifyError};

/// Glosses that only point at another entry ("Pluriel de chat.").
const FILTER_PREFIXES: [&'static str; 2] = ["pluriel de", "féminin de"];

const FORM_OF_TAG: &str = "form-of";

/// What one input line contributes to the dictionary.
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    Blank,
    FormOf,
    NoDefinitions,
    Candidate(Candidate),
}

#[derive(Debug, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub pos: Option<String>,
    pub definitions: Vec<String>,
}

pub fn process_line(line_number: usize, line: &str) -> Result<LineOutcome, SimplifyError> {
    if line.trim().is_empty() {
        return Ok(LineOutcome::Blank);
    }

    let entry: RawEntry = serde_json::from_str(line).map_err(|source| SimplifyError::Parse {
        line: line_number,
        excerpt: excerpt(line),
        source,
    })?;

    process_entry(entry).ok_or_else(|| SimplifyError::MissingBaseForm {
        line: line_number,
        excerpt: excerpt(line),
    })
}

/// `None` when the entry survives filtering but has nothing to key it by.
pub fn process_entry(entry: RawEntry) -> Option<LineOutcome> {
    if entry.has_tag(FORM_OF_TAG) {
        return Some(LineOutcome::FormOf);
    }

    let definitions = get_definitions(entry.senses.as_deref().unwrap_or(&[]));
    if definitions.is_empty() {
        return Some(LineOutcome::NoDefinitions);
    }

    let word = entry.base_form()?.to_string();

    Some(LineOutcome::Candidate(Candidate {
        word,
        pos: entry.pos,
        definitions,
    }))
}

fn get_definitions(senses: &[Sense]) -> Vec<String> {
    senses
        .iter()
        .filter_map(|sense| sense.glosses.as_ref())
        .flatten()
        .filter(|gloss| !is_reference_gloss(gloss))
        .cloned()
        .collect()
}

fn is_reference_gloss(gloss: &str) -> bool {
    let lowered = gloss.to_lowercase();
    FILTER_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

pub fn normalize_key(word: &str) -> String {
    word.to_lowercase()
}
