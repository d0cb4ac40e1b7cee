use crate::components::imports::*;
use interfacing::Article;

const STORAGE_KEY: &str = "tt_bookmarks";

/// Saved-article snapshots, newest-bookmarked-first.
///
/// Entries are full copies of the article at the moment of bookmarking,
/// keyed by article id; at most one entry per id.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks {
    entries: Vec<Article>,
}

impl Bookmarks {
    /// The sole mutation entry point: removes the entry with the same id
    /// when present, otherwise inserts the article at the front.
    pub fn toggle(&mut self, article: Article) {
        match self.entries.iter().position(|e| e.id == article.id) {
            Some(i) => {
                self.entries.remove(i);
            }
            None => self.entries.insert(0, article),
        }
    }

    pub fn is_bookmarked(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rehydrates the collection persisted under [`STORAGE_KEY`].
    /// An absent or unparsable value degrades to the empty collection.
    pub fn derived() -> Self {
        use gloo_storage::{LocalStorage, Storage};
        match LocalStorage::get::<Self>(STORAGE_KEY) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                console::log!(format!("failed to load bookmarks: {e}"));
                Self::default()
            }
        }
    }

    /// Serializes the whole collection to local storage.
    /// A write failure (quota etc.) is logged and otherwise non-fatal.
    pub fn remember(&self) {
        use gloo_storage::{LocalStorage, Storage};
        match LocalStorage::set(STORAGE_KEY, self) {
            Ok(()) => {}
            Err(e) => console::log!(format!("failed to store bookmarks: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64) -> Article {
        Article {
            id,
            title_en: format!("Title {}", id),
            content_en: format!("Content {}", id),
            date: "August 5, 2026".into(),
            source_url: format!("https://example.com/{}", id),
            status: "published".into(),
            created_at: "2026-08-05T00:00:00Z".into(),
            ..Default::default()
        }
    }

    #[test]
    fn toggle_adds_then_removes_the_same_entry() {
        let mut bookmarks = Bookmarks::default();

        bookmarks.toggle(article(1));
        assert_eq!(1, bookmarks.len());
        assert!(bookmarks.is_bookmarked(1));

        bookmarks.toggle(article(1));
        assert_eq!(0, bookmarks.len());
        assert!(!bookmarks.is_bookmarked(1));
    }

    #[test]
    fn at_most_one_entry_per_id() {
        let mut bookmarks = Bookmarks::default();

        bookmarks.toggle(article(1));
        bookmarks.toggle(article(2));
        bookmarks.toggle(article(1));

        assert!(!bookmarks.is_bookmarked(1));
        assert_eq!(1, bookmarks.len());
    }

    #[test]
    fn newest_bookmarked_first() {
        let mut bookmarks = Bookmarks::default();

        bookmarks.toggle(article(1));
        bookmarks.toggle(article(2));

        let ids = bookmarks.iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(vec![2, 1], ids);
    }

    #[test]
    fn serialized_form_round_trips() {
        let mut bookmarks = Bookmarks::default();
        bookmarks.toggle(article(1));
        bookmarks.toggle(article(2));

        let serialized = serde_json::to_string(&bookmarks).unwrap();
        let rehydrated: Bookmarks = serde_json::from_str(&serialized).unwrap();

        assert_eq!(bookmarks, rehydrated);
    }

    #[test]
    fn malformed_persisted_value_degrades_to_empty() {
        let rehydrated = serde_json::from_str::<Bookmarks>("{ not json")
            .unwrap_or_default();

        assert!(rehydrated.is_empty());
    }

    #[test]
    fn persisted_shape_is_a_flat_article_array_newest_first() {
        let mut bookmarks = Bookmarks::default();
        bookmarks.toggle(article(7));
        bookmarks.toggle(article(9));

        let serialized = serde_json::to_string(&bookmarks).unwrap();
        assert!(serialized.starts_with('['));

        let raw: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(9, raw[0]["id"]);
        assert_eq!(7, raw[1]["id"]);
    }
}
