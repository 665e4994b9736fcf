//! Review on record, handed to the page by the host as data attributes.

use crate::star_rating::Rating;

/// Attribute carrying the stored score.
pub const SCORE_ATTRIBUTE: &str = "data-review-score";

/// Attribute carrying the stored comment.
pub const COMMENT_ATTRIBUTE: &str = "data-review-comment";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredReview {
    pub score: Rating,
    pub comment: String,
}

impl StoredReview {
    /// Build from the raw attribute values. A missing or invalid score
    /// means there is no review to edit.
    pub fn from_attributes(score: Option<&str>, comment: Option<&str>) -> Option<Self> {
        let raw = score?;
        match Rating::from_field(raw) {
            Ok(score) => Some(Self {
                score,
                comment: comment.unwrap_or_default().to_string(),
            }),
            Err(e) => {
                log::warn!("Ignoring stored review score {:?}: {}", raw, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_review_from_attributes() {
        let review = StoredReview::from_attributes(Some("4"), Some("静かな宿でした")).unwrap();
        assert_eq!(review.score, Rating::new(4).unwrap());
        assert_eq!(review.comment, "静かな宿でした");
    }

    #[test]
    fn test_missing_comment_is_empty() {
        let review = StoredReview::from_attributes(Some("2"), None).unwrap();
        assert_eq!(review.comment, "");
    }

    #[test]
    fn test_no_review_without_valid_score() {
        assert_eq!(StoredReview::from_attributes(None, Some("great")), None);
        assert_eq!(StoredReview::from_attributes(Some(""), Some("great")), None);
        assert_eq!(StoredReview::from_attributes(Some("9"), None), None);
    }
}
