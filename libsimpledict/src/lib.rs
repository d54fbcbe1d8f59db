use serde::{Deserialize, Serialize};

/// One line of the wiktextract dump, reduced to the fields we read.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub forms: Option<Vec<Form>>,
    #[serde(default)]
    pub senses: Option<Vec<Sense>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Form {
    #[serde(default)]
    pub form: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Sense {
    #[serde(default)]
    pub glosses: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimplifiedEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    pub definitions: Vec<String>,
}

impl RawEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .map_or(false, |tags| tags.iter().any(|t| t == tag))
    }

    /// The lemma this entry belongs to: the first listed form, else the
    /// headword itself.
    pub fn base_form(&self) -> Option<&str> {
        match self.forms.as_deref() {
            Some([first, ..]) => first.form.as_deref(),
            _ => self.word.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_absent() {
        let entry: RawEntry = serde_json::from_str(r#"{"word":"chat"}"#).unwrap();
        assert_eq!(entry.word.as_deref(), Some("chat"));
        assert!(entry.pos.is_none());
        assert!(entry.tags.is_none());
        assert!(entry.forms.is_none());
        assert!(entry.senses.is_none());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let entry: RawEntry =
            serde_json::from_str(r#"{"word":"chat","tags":null,"senses":[{"glosses":null}]}"#)
                .unwrap();
        assert!(entry.tags.is_none());
        assert_eq!(entry.senses.unwrap()[0].glosses, None);
    }

    #[test]
    fn test_base_form_prefers_first_form() {
        let entry: RawEntry = serde_json::from_str(
            r#"{"word":"chats","forms":[{"form":"chat","tags":["singular"]},{"form":"chats"}]}"#,
        )
        .unwrap();
        assert_eq!(entry.base_form(), Some("chat"));
    }

    #[test]
    fn test_base_form_falls_back_to_word() {
        let entry: RawEntry = serde_json::from_str(r#"{"word":"chat","forms":[]}"#).unwrap();
        assert_eq!(entry.base_form(), Some("chat"));

        let entry: RawEntry = serde_json::from_str(r#"{"word":"chien"}"#).unwrap();
        assert_eq!(entry.base_form(), Some("chien"));
    }

    #[test]
    fn test_base_form_missing() {
        let entry: RawEntry = serde_json::from_str(r#"{"forms":[{"tags":["plural"]}]}"#).unwrap();
        assert_eq!(entry.base_form(), None);
        assert_eq!(RawEntry::default().base_form(), None);
    }

    #[test]
    fn test_has_tag() {
        let entry: RawEntry =
            serde_json::from_str(r#"{"word":"chats","tags":["plural","form-of"]}"#).unwrap();
        assert!(entry.has_tag("form-of"));
        assert!(!entry.has_tag("Form-of"));
        assert!(!RawEntry::default().has_tag("form-of"));
    }

    #[test]
    fn test_simplified_entry_field_order() {
        let entry = SimplifiedEntry {
            word: "chat".to_string(),
            pos: Some("noun".to_string()),
            definitions: vec!["Félin.".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"word":"chat","pos":"noun","definitions":["Félin."]}"#
        );

        let no_pos = SimplifiedEntry { pos: None, ..entry };
        assert_eq!(
            serde_json::to_string(&no_pos).unwrap(),
            r#"{"word":"chat","definitions":["Félin."]}"#
        );
    }
}
