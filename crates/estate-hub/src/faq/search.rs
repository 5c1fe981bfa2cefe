use super::domain::FaqEntry;

const TITLE_PHRASE_POINTS: u32 = 10;
const BODY_PHRASE_POINTS: u32 = 5;
const CATEGORY_PHRASE_POINTS: u32 = 3;
const TITLE_TOKEN_POINTS: u32 = 2;
const BODY_TOKEN_POINTS: u32 = 1;

/// Tokens of this many characters or fewer never score on their own.
const MIN_TOKEN_CHARS: usize = 3;

/// Lower-cased query phrase and its scoring tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreparedQuery {
    phrase: String,
    tokens: Vec<String>,
}

impl PreparedQuery {
    /// `None` for blank input: there is nothing to score.
    pub(crate) fn new(raw: &str) -> Option<Self> {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }

        let tokens = phrase
            .split_whitespace()
            .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
            .map(str::to_string)
            .collect();

        Some(Self { phrase, tokens })
    }
}

/// Additive relevance of `entry` within a category titled `category_title`.
pub(crate) fn relevance(query: &PreparedQuery, category_title: &str, entry: &FaqEntry) -> u32 {
    let title = entry.title.to_lowercase();
    let body = entry.resolution.to_lowercase();
    let mut score = 0;

    if title.contains(&query.phrase) {
        score += TITLE_PHRASE_POINTS;
    }
    if body.contains(&query.phrase) {
        score += BODY_PHRASE_POINTS;
    }
    if category_title.to_lowercase().contains(&query.phrase) {
        score += CATEGORY_PHRASE_POINTS;
    }

    for token in &query.tokens {
        if title.contains(token.as_str()) {
            score += TITLE_TOKEN_POINTS;
        }
        if body.contains(token.as_str()) {
            score += BODY_TOKEN_POINTS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, resolution: &str) -> FaqEntry {
        FaqEntry {
            id: "entry".to_string(),
            title: title.to_string(),
            resolution: resolution.to_string(),
            buyer_specific: false,
            seller_specific: false,
        }
    }

    fn prepared(raw: &str) -> PreparedQuery {
        PreparedQuery::new(raw).expect("query has content")
    }

    #[test]
    fn blank_query_prepares_nothing() {
        assert!(PreparedQuery::new("").is_none());
        assert!(PreparedQuery::new(" \t ").is_none());
    }

    #[test]
    fn short_tokens_are_dropped() {
        let query = prepared("  How to RESET my password ");
        assert_eq!(query.phrase, "how to reset my password");
        assert_eq!(query.tokens, vec!["reset", "password"]);
    }

    #[test]
    fn phrase_and_token_points_stack() {
        let query = prepared("login");
        let hit = entry("Login Issues", "Clear cookies before you login again.");
        // title phrase 10 + body phrase 5 + category phrase 3 + title token 2 + body token 1
        assert_eq!(relevance(&query, "Account & Login", &hit), 21);
    }

    #[test]
    fn tokens_score_without_full_phrase() {
        let query = prepared("reset password quickly");
        let hit = entry("Password Reset", "Use the reset link sent to your email.");
        // title: "password" +2, "reset" +2; body: "reset" +1
        assert_eq!(relevance(&query, "Account", &hit), 5);
    }

    #[test]
    fn no_overlap_scores_zero() {
        let query = prepared("swimming pool");
        let miss = entry("Refund timelines", "Refunds are processed in 7 days.");
        assert_eq!(relevance(&query, "Payments", &miss), 0);
    }

    #[test]
    fn repeated_tokens_count_each_time() {
        let query = prepared("loan loan");
        let hit = entry("Home loan eligibility", "Banks assess income.");
        // phrase "loan loan" misses; each "loan" token hits the title
        assert_eq!(relevance(&query, "Buying", &hit), 4);
    }
}
