//! Swipe Tracker
//!
//! Pure horizontal-swipe recognition, independent of any rendering surface.

/// Where a released card should go
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Released past the threshold to the right
    Right,
    /// Released past the threshold to the left
    Left,
    /// Released inside the threshold, card snaps back
    Cancel,
}

/// Tunables for pose mapping and classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTuning {
    /// Minimum |dx| in px for a release to count as a swipe
    pub threshold_px: f64,
    /// Degrees of rotation = dx / rotation_divisor
    pub rotation_divisor: f64,
    /// Displacement at which an indicator reaches full opacity
    pub indicator_full_px: f64,
    /// Rotation of a card flung off-screen
    pub fling_rotation_deg: f64,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            threshold_px: 100.0,
            rotation_divisor: 20.0,
            indicator_full_px: 100.0,
            fling_rotation_deg: 20.0,
        }
    }
}

/// Pick the swipe threshold for a viewport width.
/// Viewports narrower than `breakpoint` use `narrow`, the rest use `wide`.
pub fn threshold_for_width(width: f64, breakpoint: f64, narrow: f64, wide: f64) -> f64 {
    if width < breakpoint { narrow } else { wide }
}

/// Classify a released displacement
pub fn classify(dx: f64, threshold: f64) -> SwipeOutcome {
    if dx > threshold {
        SwipeOutcome::Right
    } else if dx < -threshold {
        SwipeOutcome::Left
    } else {
        SwipeOutcome::Cancel
    }
}

/// Visual state of the top card
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardPose {
    pub offset_x: f64,
    pub rotation_deg: f64,
    /// Opacity of the right-hand ("like") indicator
    pub right_opacity: f64,
    /// Opacity of the left-hand ("nope") indicator
    pub left_opacity: f64,
}

impl CardPose {
    pub const CENTER: CardPose = CardPose {
        offset_x: 0.0,
        rotation_deg: 0.0,
        right_opacity: 0.0,
        left_opacity: 0.0,
    };

    /// Pose while dragged `dx` px from the start point
    pub fn from_offset(dx: f64, tuning: &SwipeTuning) -> Self {
        let strength = (dx.abs() / tuning.indicator_full_px).min(1.0);
        let (right_opacity, left_opacity) = if dx > 0.0 {
            (strength, 0.0)
        } else {
            (0.0, strength)
        };
        Self {
            offset_x: dx,
            rotation_deg: dx / tuning.rotation_divisor,
            right_opacity,
            left_opacity,
        }
    }

    /// Off-screen pose for a card leaving (or re-entering) from one side.
    /// `Cancel` maps to center.
    pub fn flung(outcome: SwipeOutcome, viewport_width: f64, tuning: &SwipeTuning) -> Self {
        match outcome {
            SwipeOutcome::Right => Self {
                offset_x: viewport_width,
                rotation_deg: tuning.fling_rotation_deg,
                right_opacity: 1.0,
                left_opacity: 0.0,
            },
            SwipeOutcome::Left => Self {
                offset_x: -viewport_width,
                rotation_deg: -tuning.fling_rotation_deg,
                right_opacity: 0.0,
                left_opacity: 1.0,
            },
            SwipeOutcome::Cancel => Self::CENTER,
        }
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!("translateX({}px) rotate({}deg)", self.offset_x, self.rotation_deg)
    }
}

/// Abstract drag input: the three callbacks a surface delivers.
///
/// `x` is the pointer's horizontal client coordinate in px.
pub trait DragInput {
    fn on_drag_start(&mut self, x: f64);
    /// Returns the new pose, or `None` when no drag is active
    fn on_drag_move(&mut self, x: f64) -> Option<CardPose>;
    /// Returns the outcome, or `None` when no drag was active
    fn on_drag_end(&mut self, x: f64) -> Option<SwipeOutcome>;
}

/// Tracks one drag at a time
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    tuning: SwipeTuning,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(tuning: SwipeTuning) -> Self {
        Self { tuning, start_x: None }
    }

    pub fn tuning(&self) -> &SwipeTuning {
        &self.tuning
    }

    pub fn set_tuning(&mut self, tuning: SwipeTuning) {
        self.tuning = tuning;
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Abandon the current drag without an outcome
    pub fn abort(&mut self) {
        self.start_x = None;
    }
}

impl DragInput for SwipeTracker {
    fn on_drag_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    fn on_drag_move(&mut self, x: f64) -> Option<CardPose> {
        let start = self.start_x?;
        Some(CardPose::from_offset(x - start, &self.tuning))
    }

    fn on_drag_end(&mut self, x: f64) -> Option<SwipeOutcome> {
        let start = self.start_x.take()?;
        Some(classify(x - start, self.tuning.threshold_px))
    }
}
