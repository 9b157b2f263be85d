//! Swipe Session
//!
//! State machine for one batch: cursor, liked set, undo history.
//! Pure data, no browser access; the view drives it and renders from it.

use crate::error::BatchError;
use crate::models::{Decision, HistoryEntry, ImageRef, Summary};

/// Which view the session is in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the batch to preload
    #[default]
    Loading,
    /// Cards left to decide on
    Swiping,
    /// Cursor reached the end of the batch
    Summary,
    /// Batch could not be loaded; offer a retry
    Failed(BatchError),
}

/// A decided card still animating off the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingExit {
    pub index: usize,
    pub decision: Decision,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeSession {
    batch: Vec<ImageRef>,
    cursor: usize,
    liked: Vec<ImageRef>,
    history: Vec<HistoryEntry>,
    pending_exit: Option<PendingExit>,
    phase: Phase,
    generation: u32,
}

impl SwipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Loading
    // ========================

    /// Generation a load started now must report back with
    pub fn begin_load(&self) -> u32 {
        self.generation
    }

    /// Install a loaded batch (or its failure).
    /// Returns false when the result belongs to an older generation or
    /// the session isn't waiting for one.
    pub fn finish_load(&mut self, generation: u32, result: Result<Vec<ImageRef>, BatchError>) -> bool {
        if generation != self.generation || self.phase != Phase::Loading {
            return false;
        }
        self.phase = match result {
            Ok(batch) if batch.is_empty() => Phase::Failed(BatchError::EmptyBatch),
            Ok(batch) => {
                self.batch = batch;
                Phase::Swiping
            }
            Err(err) => Phase::Failed(err),
        };
        true
    }

    /// Clear everything and go back to Loading. Any load still in flight
    /// becomes stale.
    pub fn reset(&mut self) {
        self.batch.clear();
        self.liked.clear();
        self.history.clear();
        self.cursor = 0;
        self.pending_exit = None;
        self.phase = Phase::Loading;
        self.generation = self.generation.wrapping_add(1);
    }

    // ========================
    // Decisions
    // ========================

    /// Decide on the top card. The cursor moves once `complete_exit`
    /// reports the card's exit animation is done.
    pub fn decide(&mut self, decision: Decision) -> Option<HistoryEntry> {
        if self.phase != Phase::Swiping || self.pending_exit.is_some() {
            return None;
        }
        let image = self.batch.get(self.cursor)?.clone();
        let entry = HistoryEntry { index: self.cursor, image, decision };

        if decision == Decision::Like {
            self.liked.push(entry.image.clone());
        }
        self.history.push(entry.clone());
        self.pending_exit = Some(PendingExit { index: self.cursor, decision });
        Some(entry)
    }

    /// Exit animation for the card at `index` finished: advance the cursor.
    /// Returns the resulting phase, or `None` when no exit for `index` is pending.
    pub fn complete_exit(&mut self, index: usize) -> Option<&Phase> {
        match self.pending_exit {
            Some(pending) if pending.index == index => {}
            _ => return None,
        }
        self.pending_exit = None;
        self.cursor += 1;
        if self.cursor >= self.batch.len() {
            self.phase = Phase::Summary;
        }
        Some(&self.phase)
    }

    /// Revert the last decision. No-op (returns `None`) with empty history,
    /// outside Swiping, or while a card is still animating out.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        let last = self.history.pop()?;
        if last.decision == Decision::Like {
            self.liked.retain(|image| image != &last.image);
        }
        self.cursor = last.index;
        Some(last)
    }

    // ========================
    // Queries
    // ========================

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn batch(&self) -> &[ImageRef] {
        &self.batch
    }

    pub fn batch_len(&self) -> usize {
        self.batch.len()
    }

    pub fn liked(&self) -> &[ImageRef] {
        &self.liked
    }

    #[cfg(test)]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn pending_exit(&self) -> Option<PendingExit> {
        self.pending_exit
    }

    pub fn can_undo(&self) -> bool {
        self.phase == Phase::Swiping && self.pending_exit.is_none() && !self.history.is_empty()
    }

    #[cfg(test)]
    pub fn top_card(&self) -> Option<&ImageRef> {
        match self.phase {
            Phase::Swiping => self.batch.get(self.cursor),
            _ => None,
        }
    }

    /// Cards to draw, top first: `(batch index, image, z-index)`.
    /// At most `depth` cards.
    pub fn visible_stack(&self, depth: usize) -> Vec<(usize, ImageRef, usize)> {
        if self.phase != Phase::Swiping {
            return Vec::new();
        }
        let len = self.batch.len();
        let end = len.min(self.cursor + depth);
        (self.cursor..end)
            .map(|i| (i, self.batch[i].clone(), len - i))
            .collect()
    }

    pub fn summary(&self) -> Option<Summary> {
        match self.phase {
            Phase::Summary => Some(Summary {
                liked: self.liked.clone(),
                total: self.batch.len(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().map(|n| ImageRef::new(*n)).collect()
    }

    fn loaded(names: &[&str]) -> SwipeSession {
        let mut session = SwipeSession::new();
        let generation = session.begin_load();
        assert!(session.finish_load(generation, Ok(refs(names))));
        session
    }

    /// decide + its exit animation completing
    fn swipe(session: &mut SwipeSession, decision: Decision) {
        let entry = session.decide(decision).expect("decision accepted");
        session.complete_exit(entry.index).expect("exit pending");
    }

    #[test]
    fn test_load_enters_swiping() {
        let session = loaded(&["A", "B"]);
        assert_eq!(session.phase(), &Phase::Swiping);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.top_card(), Some(&ImageRef::new("A")));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_empty_batch_fails() {
        let mut session = SwipeSession::new();
        let generation = session.begin_load();
        assert!(session.finish_load(generation, Ok(vec![])));
        assert_eq!(session.phase(), &Phase::Failed(BatchError::EmptyBatch));
    }

    #[test]
    fn test_fetch_failure_fails_and_retry_reloads() {
        let mut session = SwipeSession::new();
        let generation = session.begin_load();
        let err = BatchError::FetchFailure("boom".to_string());
        session.finish_load(generation, Err(err.clone()));
        assert_eq!(session.phase(), &Phase::Failed(err));

        session.reset();
        assert_eq!(session.phase(), &Phase::Loading);
        let generation = session.begin_load();
        assert!(session.finish_load(generation, Ok(refs(&["A"]))));
        assert_eq!(session.phase(), &Phase::Swiping);
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut session = SwipeSession::new();
        let stale = session.begin_load();
        session.reset();
        let fresh = session.begin_load();
        assert_ne!(stale, fresh);

        assert!(!session.finish_load(stale, Ok(refs(&["old"]))));
        assert_eq!(session.phase(), &Phase::Loading);
        assert!(session.finish_load(fresh, Ok(refs(&["new"]))));
        assert_eq!(session.batch(), refs(&["new"]).as_slice());

        // A second result for the same generation doesn't replace the batch
        assert!(!session.finish_load(fresh, Ok(refs(&["again"]))));
        assert_eq!(session.batch(), refs(&["new"]).as_slice());
    }

    #[test]
    fn test_cursor_equals_decisions() {
        let mut session = loaded(&["A", "B", "C", "D", "E"]);
        let pattern = [Decision::Like, Decision::Dislike, Decision::Dislike, Decision::Like];
        for (n, decision) in pattern.iter().enumerate() {
            let before = session.cursor();
            swipe(&mut session, *decision);
            assert_eq!(session.cursor(), before + 1);
            assert_eq!(session.cursor(), n + 1);
            assert_eq!(session.history().len(), n + 1);
        }
        assert_eq!(session.liked(), refs(&["A", "D"]).as_slice());
    }

    #[test]
    fn test_cursor_waits_for_exit() {
        let mut session = loaded(&["A", "B"]);
        let entry = session.decide(Decision::Like).unwrap();
        assert_eq!(entry.index, 0);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.pending_exit(), Some(PendingExit { index: 0, decision: Decision::Like }));

        // No second decision or undo mid-animation
        assert_eq!(session.decide(Decision::Dislike), None);
        assert!(!session.can_undo());
        assert_eq!(session.undo(), None);

        assert_eq!(session.complete_exit(0), Some(&Phase::Swiping));
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_complete_exit_is_keyed_by_index() {
        let mut session = loaded(&["A", "B", "C"]);
        session.decide(Decision::Dislike).unwrap();
        assert_eq!(session.complete_exit(1), None);
        assert_eq!(session.complete_exit(0), Some(&Phase::Swiping));
        // Late duplicate signal for the same card
        assert_eq!(session.complete_exit(0), None);
        assert_eq!(session.cursor(), 1);

        session.decide(Decision::Dislike).unwrap();
        assert_eq!(session.complete_exit(0), None);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_undo_restores_state() {
        let mut session = loaded(&["A", "B", "C"]);
        swipe(&mut session, Decision::Dislike);

        let before_cursor = session.cursor();
        let before_liked = session.liked().to_vec();
        swipe(&mut session, Decision::Like);
        assert_eq!(session.liked(), refs(&["B"]).as_slice());

        let undone = session.undo().unwrap();
        assert_eq!(undone.decision, Decision::Like);
        assert_eq!(undone.image, ImageRef::new("B"));
        assert_eq!(session.cursor(), before_cursor);
        assert_eq!(session.liked(), before_liked.as_slice());
        assert_eq!(session.top_card(), Some(&ImageRef::new("B")));
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut session = loaded(&["A"]);
        let before = session.clone();
        assert_eq!(session.undo(), None);
        assert_eq!(session, before);

        assert_eq!(SwipeSession::new().undo(), None);
    }

    #[test]
    fn test_liked_matches_history() {
        let mut session = loaded(&["A", "B", "C", "D"]);
        swipe(&mut session, Decision::Like);
        swipe(&mut session, Decision::Like);
        session.undo();
        swipe(&mut session, Decision::Dislike);
        swipe(&mut session, Decision::Like);
        swipe(&mut session, Decision::Like);

        assert!(session.liked().len() <= session.batch_len());
        for image in session.liked() {
            let entry = session.history().iter().find(|e| &e.image == image).unwrap();
            assert_eq!(entry.decision, Decision::Like);
        }
        assert_eq!(session.liked(), refs(&["A", "C", "D"]).as_slice());
    }

    #[test]
    fn test_scenario_like_dislike_undo_to_summary() {
        let mut session = loaded(&["A", "B", "C"]);

        swipe(&mut session, Decision::Like);
        assert_eq!(session.liked(), refs(&["A"]).as_slice());
        assert_eq!(session.cursor(), 1);

        swipe(&mut session, Decision::Dislike);
        assert_eq!(session.liked(), refs(&["A"]).as_slice());
        assert_eq!(session.cursor(), 2);

        session.undo().unwrap();
        assert_eq!(session.liked(), refs(&["A"]).as_slice());
        assert_eq!(session.cursor(), 1);

        swipe(&mut session, Decision::Like);
        assert_eq!(session.liked(), refs(&["A", "B"]).as_slice());
        assert_eq!(session.cursor(), 2);

        swipe(&mut session, Decision::Dislike);
        assert_eq!(session.cursor(), 3);
        assert_eq!(session.phase(), &Phase::Summary);

        let summary = session.summary().unwrap();
        assert_eq!(summary.like_count(), 2);
        assert_eq!(summary.total, 3);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summary_without_likes_is_empty() {
        let mut session = loaded(&["A", "B"]);
        swipe(&mut session, Decision::Dislike);
        swipe(&mut session, Decision::Dislike);
        let summary = session.summary().unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.like_count(), 0);
    }

    #[test]
    fn test_no_decisions_or_undo_in_summary() {
        let mut session = loaded(&["A"]);
        swipe(&mut session, Decision::Like);
        assert_eq!(session.phase(), &Phase::Summary);
        assert_eq!(session.decide(Decision::Like), None);
        assert!(!session.can_undo());
        assert_eq!(session.undo(), None);
        assert_eq!(session.top_card(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = loaded(&["A", "B"]);
        swipe(&mut session, Decision::Like);
        session.decide(Decision::Dislike);
        session.reset();

        assert_eq!(session.phase(), &Phase::Loading);
        assert_eq!(session.cursor(), 0);
        assert!(session.batch().is_empty());
        assert!(session.liked().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.pending_exit(), None);
        assert_eq!(session.complete_exit(1), None);
    }

    #[test]
    fn test_visible_stack() {
        let mut session = loaded(&["A", "B", "C", "D"]);
        let stack = session.visible_stack(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack[0], (0, ImageRef::new("A"), 4));
        assert_eq!(stack[2], (2, ImageRef::new("C"), 2));

        swipe(&mut session, Decision::Dislike);
        swipe(&mut session, Decision::Dislike);
        swipe(&mut session, Decision::Dislike);
        let stack = session.visible_stack(3);
        assert_eq!(stack, vec![(3, ImageRef::new("D"), 1)]);

        swipe(&mut session, Decision::Dislike);
        assert!(session.visible_stack(3).is_empty());
    }
}
