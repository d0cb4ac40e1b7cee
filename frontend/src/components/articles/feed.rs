// Search and display partitioning over the fetched article collection.
// Recomputed on every keystroke; the whole collection is in memory.

use interfacing::Article;

/// Case-insensitive substring match of the query against title-plus-content
/// (each falling back between language variants). Empty query passes
/// everything; input order is preserved.
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.to_lowercase();

    articles
        .iter()
        .filter(|article| {
            let haystack =
                format!("{} {}", article.title(), article.content()).to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}

pub struct Feed<'a> {
    pub featured: Option<&'a Article>,
    pub main: &'a [&'a Article],
    pub remaining: &'a [&'a Article],
}

/// Splits a filtered sequence into the three display slices:
/// featured = index 0, main = 1..=4, remaining = 5 onward.
pub fn partition<'a>(filtered: &'a [&'a Article]) -> Feed<'a> {
    let len = filtered.len();

    Feed {
        featured: filtered.first().copied(),
        main: &filtered[1.min(len)..5.min(len)],
        remaining: &filtered[5.min(len)..],
    }
}

/// Char-boundary-safe content preview.
pub fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut = text.chars().take(limit).collect::<String>();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64, title_en: &str, content_en: &str) -> Article {
        Article {
            id,
            title_en: title_en.into(),
            content_en: content_en.into(),
            date: "August 5, 2026".into(),
            source_url: format!("https://example.com/{}", id),
            status: "published".into(),
            created_at: "2026-08-05T00:00:00Z".into(),
            ..Default::default()
        }
    }

    fn collection(ids: impl IntoIterator<Item = i64>) -> Vec<Article> {
        ids.into_iter()
            .map(|id| article(id, &format!("Title {}", id), &format!("Content {}", id)))
            .collect()
    }

    #[test]
    fn empty_query_passes_everything_in_order() {
        let articles = collection([7, 6, 5, 4, 3, 2, 1]);

        let filtered = search(&articles, "");

        let ids = filtered.iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(vec![7, 6, 5, 4, 3, 2, 1], ids);
    }

    #[test]
    fn query_matches_content_only() {
        let mut articles = collection([3, 2, 1]);
        articles[1].content_en = "the harbor expansion continues".into();

        let filtered = search(&articles, "harbor");

        let ids = filtered.iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(vec![2], ids);
    }

    #[test]
    fn query_is_case_insensitive() {
        let mut articles = collection([2, 1]);
        articles[0].title_en = "Parliament Vote".into();

        let filtered = search(&articles, "parliament");

        assert_eq!(1, filtered.len());
        assert_eq!(2, filtered[0].id);
    }

    #[test]
    fn search_falls_back_to_arabic_fields() {
        let mut without_english = article(1, "", "");
        without_english.title_ar = "طنجة".into();
        without_english.content_ar = "ميناء المدينة".into();
        let articles = vec![without_english];

        let filtered = search(&articles, "ميناء");

        assert_eq!(1, filtered.len());
    }

    #[test]
    fn partition_covers_the_sequence_for_any_length() {
        for n in 0..=8 {
            let articles = collection((1..=n).rev());
            let filtered = search(&articles, "");
            let feed = partition(&filtered);

            let mut reconstructed = vec![];
            reconstructed.extend(feed.featured.iter().map(|a| a.id));
            reconstructed.extend(feed.main.iter().map(|a| a.id));
            reconstructed.extend(feed.remaining.iter().map(|a| a.id));

            let original = filtered.iter().map(|a| a.id).collect::<Vec<_>>();
            assert_eq!(original, reconstructed, "length {}", n);

            assert!(feed.main.len() <= 4);
        }
    }

    #[test]
    fn partition_of_seven_articles() {
        let articles = collection([7, 6, 5, 4, 3, 2, 1]);
        let filtered = search(&articles, "");
        let feed = partition(&filtered);

        assert_eq!(7, feed.featured.unwrap().id);
        assert_eq!(
            vec![6, 5, 4, 3],
            feed.main.iter().map(|a| a.id).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![2, 1],
            feed.remaining.iter().map(|a| a.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn partition_of_the_empty_sequence() {
        let feed = partition(&[]);

        assert!(feed.featured.is_none());
        assert!(feed.main.is_empty());
        assert!(feed.remaining.is_empty());
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let text = "محتوى طويل عن المدينة القديمة وأسواقها";

        let preview = excerpt(text, 10);

        assert!(preview.ends_with("..."));
        assert_eq!(10, preview.chars().count() - 3);
    }

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!("short", excerpt("short", 120));
    }
}
