use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{error, info, warn};

use libsimpledict::SimplifiedEntry;

use crate::error::SimplifyError;
use crate::phase1load::InputLine;
use crate::phase2transform::{normalize_key, process_line, Candidate, LineOutcome};

/// Normalized key -> entry, iterated in the order keys were first seen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, SimplifiedEntry)>,
    index: HashMap<String, usize>,
}

#[derive(Debug, PartialEq)]
pub enum MergeOutcome {
    Inserted,
    Merged,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SimplifiedEntry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn first(&self) -> Option<(&str, &SimplifiedEntry)> {
        self.entries.first().map(|(k, e)| (k.as_str(), e))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SimplifiedEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// First occurrence of a key fixes `word` and `pos`; later ones only
    /// add definitions.
    pub fn insert_or_merge(&mut self, candidate: Candidate) -> MergeOutcome {
        let key = normalize_key(&candidate.word);

        match self.index.get(&key) {
            Some(&i) => {
                let existing = &mut self.entries[i].1;
                existing.definitions.extend(candidate.definitions);
                dedup_preserve_order(&mut existing.definitions);
                MergeOutcome::Merged
            }
            None => {
                let mut definitions = candidate.definitions;
                dedup_preserve_order(&mut definitions);

                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((
                    key,
                    SimplifiedEntry {
                        word: candidate.word,
                        pos: candidate.pos,
                        definitions,
                    },
                ));
                MergeOutcome::Inserted
            }
        }
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

fn dedup_preserve_order<T: Eq + std::hash::Hash + Clone>(v: &mut Vec<T>) {
    let mut seen = HashSet::new();
    v.retain(|item| seen.insert(item.clone()));
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReduceStats {
    pub lines: usize,
    pub blank: usize,
    pub form_of: usize,
    pub no_definitions: usize,
    pub inserted: usize,
    pub merged: usize,
    pub errors: usize,
}

impl fmt::Display for ReduceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines: {} inserted, {} merged, {} form-of, {} without definitions, {} blank, {} errors",
            self.lines,
            self.inserted,
            self.merged,
            self.form_of,
            self.no_definitions,
            self.blank,
            self.errors
        )
    }
}

/// Folds every line into `dictionary`. Bad lines are logged and skipped.
pub fn reduce_lines<'a, I>(
    lines: I,
    mut dictionary: Dictionary,
    progress_interval: usize,
) -> (Dictionary, ReduceStats)
where
    I: IntoIterator<Item = Result<InputLine<'a>, SimplifyError>>,
{
    let mut stats = ReduceStats::default();
    let mut last_print = 0;

    for line in lines {
        stats.lines += 1;

        let outcome = line.and_then(|l| process_line(l.number, l.text));
        match outcome {
            Ok(LineOutcome::Blank) => stats.blank += 1,
            Ok(LineOutcome::FormOf) => stats.form_of += 1,
            Ok(LineOutcome::NoDefinitions) => stats.no_definitions += 1,
            Ok(LineOutcome::Candidate(candidate)) => match dictionary.insert_or_merge(candidate) {
                MergeOutcome::Inserted => stats.inserted += 1,
                MergeOutcome::Merged => stats.merged += 1,
            },
            Err(e) if e.is_recoverable() => {
                warn!("Error processing line: {}", e);
                stats.errors += 1;
            }
            Err(e) => {
                error!("Unexpected error while reducing: {}", e);
                stats.errors += 1;
            }
        }

        if progress_interval > 0 && stats.lines - last_print >= progress_interval {
            info!(
                "Processed {} lines, {} entries so far",
                stats.lines,
                dictionary.len()
            );
            last_print = stats.lines;
        }
    }

    (dictionary, stats)
}
