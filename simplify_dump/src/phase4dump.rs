use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SimplifyError;
use crate::phase3merge::Dictionary;

/// Writes the dictionary as a two-space pretty-printed JSON object.
/// An empty dictionary is still written, as `{}`.
pub fn output_dictionary(dictionary: &Dictionary, output_path: &Path) -> Result<(), SimplifyError> {
    let write_err = |source| SimplifyError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dictionary)
        .map_err(|e| write_err(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase2transform::Candidate;

    #[test]
    fn test_output_pretty_two_space() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simplified_dictionary.json");

        let mut dict = Dictionary::new();
        dict.insert_or_merge(Candidate {
            word: "chat".to_string(),
            pos: Some("noun".to_string()),
            definitions: vec!["Félin.".to_string(), "Personne.".to_string()],
        });
        output_dictionary(&dict, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let expected = r#"{
  "chat": {
    "word": "chat",
    "pos": "noun",
    "definitions": [
      "Félin.",
      "Personne."
    ]
  }
}"#;
        assert_eq!(written, expected);
    }

    #[test]
    fn test_output_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simplified_dictionary.json");

        output_dictionary(&Dictionary::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_output_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = output_dictionary(&Dictionary::new(), &path).unwrap_err();
        assert!(matches!(err, SimplifyError::Write { .. }));
    }
}
