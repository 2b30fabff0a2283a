/// Ranking engine - derives a word-count score over the posts collection
///
/// Fetches every post, scores it by the whitespace-separated word count of
/// its long description, and returns the top K. This is a full in-memory
/// scan, O(n log n) in the collection size; at larger scale the same result
/// belongs in a store-side aggregation pipeline or an incrementally
/// maintained top-K index.
use mongodb::Database;
use tracing::debug;

use crate::db::post_repo;
use crate::error::Result;
use crate::models::{Post, RankedPost};

/// Default number of posts returned by the top-posts endpoint.
pub const DEFAULT_TOP_POSTS: usize = 10;

pub struct RankingService {
    db: Database,
}

impl RankingService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Return the `k` posts with the highest long-description word counts,
    /// descending. An empty collection yields an empty result, not an error.
    pub async fn top_posts(&self, k: usize) -> Result<Vec<RankedPost>> {
        let posts = post_repo::find_all_posts(&self.db).await?;
        debug!("Ranking {} posts by word count (k = {})", posts.len(), k);
        Ok(rank_by_word_count(posts, k))
    }
}

/// Whitespace-separated word count; a missing field counts as zero words.
fn word_count(text: Option<&str>) -> usize {
    text.map(|t| t.split_whitespace().count()).unwrap_or(0)
}

/// Score and sort posts by word count descending, keeping at most `k`.
///
/// The sort is stable, so posts with equal word counts retain their
/// retrieval order.
fn rank_by_word_count(posts: Vec<Post>, k: usize) -> Vec<RankedPost> {
    let mut ranked: Vec<RankedPost> = posts
        .into_iter()
        .map(|post| {
            let word_count = word_count(post.long_description.as_deref());
            RankedPost { post, word_count }
        })
        .collect();

    ranked.sort_by(|a, b| b.word_count.cmp(&a.word_count));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_body(title: &str, body: Option<String>) -> Post {
        Post {
            id: None,
            title: title.to_string(),
            short_description: String::new(),
            long_description: body,
            photo: String::new(),
            category: None,
            created_at: None,
            author: None,
        }
    }

    fn body_of_words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count_splits_on_whitespace_runs() {
        assert_eq!(word_count(Some("one   two\tthree\nfour")), 4);
        assert_eq!(word_count(Some("  leading and trailing  ")), 3);
        assert_eq!(word_count(Some("")), 0);
        assert_eq!(word_count(None), 0);
    }

    #[test]
    fn test_rank_orders_by_word_count_descending() {
        let posts = vec![
            post_with_body("a", Some(body_of_words(5))),
            post_with_body("b", Some(body_of_words(50))),
            post_with_body("c", Some(body_of_words(1))),
            post_with_body("d", Some(body_of_words(20))),
        ];

        let ranked = rank_by_word_count(posts, 10);
        let counts: Vec<usize> = ranked.iter().map(|r| r.word_count).collect();
        assert_eq!(counts, vec![50, 20, 5, 1]);
        let titles: Vec<&str> = ranked.iter().map(|r| r.post.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_caps_output_at_k() {
        let posts = (0..15)
            .map(|i| post_with_body(&format!("p{i}"), Some(body_of_words(i + 1))))
            .collect();

        let ranked = rank_by_word_count(posts, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].word_count, 15);
        assert_eq!(ranked[9].word_count, 6);
    }

    #[test]
    fn test_rank_of_empty_collection_is_empty() {
        assert!(rank_by_word_count(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_missing_long_description_ranks_as_zero_words() {
        let posts = vec![
            post_with_body("none", None),
            post_with_body("some", Some("just three words".to_string())),
        ];

        let ranked = rank_by_word_count(posts, 10);
        assert_eq!(ranked[0].post.title, "some");
        assert_eq!(ranked[1].word_count, 0);
    }

    #[test]
    fn test_ties_keep_retrieval_order() {
        let posts = vec![
            post_with_body("first", Some("same size here".to_string())),
            post_with_body("second", Some("also three words".to_string())),
            post_with_body("third", Some("one".to_string())),
        ];

        let ranked = rank_by_word_count(posts, 10);
        let titles: Vec<&str> = ranked.iter().map(|r| r.post.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
