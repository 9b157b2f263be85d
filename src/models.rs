//! Frontend Models
//!
//! Data structures for one swiping session.

use serde::{Deserialize, Serialize};
use leptos_swipe::SwipeOutcome;

/// Reference to one image in a batch (its URL)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A like or dislike taken on the card at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Like,
    Dislike,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Like => "like",
            Decision::Dislike => "dislike",
        }
    }

    /// Swipe side a decision leaves (and undo re-enters) from
    pub fn side(&self) -> SwipeOutcome {
        match self {
            Decision::Like => SwipeOutcome::Right,
            Decision::Dislike => SwipeOutcome::Left,
        }
    }

    /// Decision for a released swipe; `None` for a cancel
    pub fn from_outcome(outcome: SwipeOutcome) -> Option<Self> {
        match outcome {
            SwipeOutcome::Right => Some(Decision::Like),
            SwipeOutcome::Left => Some(Decision::Dislike),
            SwipeOutcome::Cancel => None,
        }
    }
}

/// One recorded decision, for undo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Cursor position the decision was taken at
    pub index: usize,
    pub image: ImageRef,
    pub decision: Decision,
}

/// Result of a finished batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub liked: Vec<ImageRef>,
    pub total: usize,
}

impl Summary {
    pub fn like_count(&self) -> usize {
        self.liked.len()
    }

    /// No likes at all: show the empty-state view instead of the gallery
    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_outcome_mapping() {
        assert_eq!(Decision::from_outcome(SwipeOutcome::Right), Some(Decision::Like));
        assert_eq!(Decision::from_outcome(SwipeOutcome::Left), Some(Decision::Dislike));
        assert_eq!(Decision::from_outcome(SwipeOutcome::Cancel), None);
        assert_eq!(Decision::Like.side(), SwipeOutcome::Right);
        assert_eq!(Decision::Dislike.side(), SwipeOutcome::Left);
    }

    #[test]
    fn test_history_entry_serialization() {
        let entry = HistoryEntry {
            index: 2,
            image: ImageRef::new("https://cataas.com/cat?random=0.5"),
            decision: Decision::Like,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"index":2,"image":"https://cataas.com/cat?random=0.5","decision":"like"}"#);
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary { liked: vec![ImageRef::new("a")], total: 3 };
        assert_eq!(summary.like_count(), 1);
        assert!(!summary.is_empty());
        assert!(Summary { liked: vec![], total: 3 }.is_empty());
    }
}
