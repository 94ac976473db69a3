//! Content item and product models

use serde::{Deserialize, Serialize};

/// Kind of content behind an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Pdf,
    Audio,
    /// Mixed bundle (e.g. PDF plus audio)
    Bundle,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::Pdf => write!(f, "pdf"),
            ContentKind::Audio => write!(f, "audio"),
            ContentKind::Bundle => write!(f, "bundle"),
        }
    }
}

/// A single unit of content (lesson or bonus)
///
/// `unlock_offset_days` of 0 means available as soon as the owning
/// product is entitled. `content_ref` is an opaque link to the hosted
/// content; the core never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ContentKind,
    pub duration: Option<String>,
    pub unlock_offset_days: u32,
    pub content_ref: Option<String>,
}

impl ContentItem {
    pub fn new(id: &str, title: &str, description: &str, kind: ContentKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            duration: None,
            unlock_offset_days: 0,
            content_ref: None,
        }
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    pub fn unlocks_on_day(mut self, day: u32) -> Self {
        self.unlock_offset_days = day;
        self
    }

    pub fn with_content_ref(mut self, url: &str) -> Self {
        self.content_ref = Some(url.to_string());
        self
    }
}

/// A named, ordered collection of content items plus bonus items
///
/// Products are static and defined independently of any user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub modules: Vec<ContentItem>,
    pub bonus: Vec<ContentItem>,
}

impl Product {
    /// Find an item by id across both the module and bonus collections
    pub fn find_item(&self, item_id: &str) -> Option<&ContentItem> {
        self.modules
            .iter()
            .chain(self.bonus.iter())
            .find(|m| m.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder_defaults() {
        let item = ContentItem::new("intro", "Intro", "Welcome", ContentKind::Video);
        assert_eq!(item.unlock_offset_days, 0);
        assert!(item.duration.is_none());
        assert!(item.content_ref.is_none());
    }

    #[test]
    fn test_find_item_searches_bonus() {
        let product = Product {
            id: "p".to_string(),
            name: "P".to_string(),
            subtitle: String::new(),
            description: String::new(),
            modules: vec![ContentItem::new("a", "A", "", ContentKind::Video)],
            bonus: vec![ContentItem::new("b", "B", "", ContentKind::Pdf)],
        };
        assert!(product.find_item("a").is_some());
        assert!(product.find_item("b").is_some());
        assert!(product.find_item("c").is_none());
    }
}
