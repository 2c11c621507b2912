//! Showcase items

use serde::{Deserialize, Serialize};

/// One panel on the ring. Identity is its position in the item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Bullet lines shown under the title
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            lines: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_optional_fields_default() {
        let item: Item = serde_json::from_str(r#"{"title":"Glass Nav"}"#).unwrap();
        assert_eq!(item.title, "Glass Nav");
        assert_eq!(item.subtitle, None);
        assert!(item.lines.is_empty());
    }

    #[test]
    fn test_item_missing_title_rejected() {
        let result = serde_json::from_str::<Item>(r#"{"subtitle":"Theme"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_builder() {
        let item = Item::new("Toast Stack")
            .with_subtitle("Feedback")
            .with_lines(["Auto hide"]);
        assert_eq!(item.subtitle.as_deref(), Some("Feedback"));
        assert_eq!(item.lines, vec!["Auto hide".to_string()]);
    }
}
