use crate::imports::*;

/// A published news record. The backend stores both language pairs;
/// API responses carry the English-facing projection, so the Arabic
/// fields default to empty on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Article {
    pub id: i64,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_ar: String,
    #[serde(default)]
    pub content_en: String,
    #[serde(default)]
    pub content_ar: String,
    pub date: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub source_url: String,
    pub status: String,
    pub created_at: String,
}

impl Article {
    // exactly one language pair is guaranteed non-empty per record
    pub fn title(&self) -> &str {
        if self.title_en.is_empty() {
            &self.title_ar
        } else {
            &self.title_en
        }
    }

    pub fn content(&self) -> &str {
        if self.content_en.is_empty() {
            &self.content_ar
        } else {
            &self.content_en
        }
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("News")
    }
}
