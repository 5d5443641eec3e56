use crate::models::{CardTransform, DragInput, SwipeOutcome};

/// Tunables for swipe classification and card physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Release velocity above which a drag counts as a swipe
    pub velocity: f64,
    /// A like must stay within this vertical band
    pub like_max_vertical: f64,
    /// A superlike must rise at least this far (upward is negative dy)
    pub superlike_min_rise: f64,
    /// Offset the card is flung to once classified
    pub fling_distance: f64,
    pub fling_rotation: f64,
    /// Drag rotation is dx divided by this
    pub drag_rotation_divisor: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            velocity: 0.2,
            like_max_vertical: 100.0,
            superlike_min_rise: 50.0,
            fling_distance: 500.0,
            fling_rotation: 15.0,
            drag_rotation_divisor: 20.0,
        }
    }
}

/// Classification of one drag event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureResult {
    pub outcome: Option<SwipeOutcome>,
    pub transform: CardTransform,
}

/// Turns drag events into swipe outcomes and card transforms
///
/// A release faster than the velocity threshold is classified in a fixed
/// order, and the first rule that holds wins:
/// 1. leftward travel is a skip, whatever the vertical displacement
/// 2. rightward travel inside the vertical band is a like
/// 3. a rise past the superlike threshold is a superlike
///
/// So a fast up-and-left release is always a skip. Anything else snaps the
/// card back to the origin on release, or follows the pointer while it is
/// still down.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    pub fn classify(&self, input: &DragInput) -> GestureResult {
        let t = &self.thresholds;
        let (mx, my) = input.movement;

        if input.down {
            return GestureResult {
                outcome: None,
                transform: CardTransform {
                    x: mx,
                    y: my,
                    rotate: mx / t.drag_rotation_divisor,
                },
            };
        }

        if input.velocity <= t.velocity {
            return snap_back();
        }

        if input.direction_x < 0.0 {
            fling(
                SwipeOutcome::Left,
                CardTransform { x: -t.fling_distance, y: 0.0, rotate: -t.fling_rotation },
            )
        } else if my.abs() < t.like_max_vertical {
            fling(
                SwipeOutcome::Right,
                CardTransform { x: t.fling_distance, y: 0.0, rotate: t.fling_rotation },
            )
        } else if my < -t.superlike_min_rise {
            fling(
                SwipeOutcome::Up,
                CardTransform { x: 0.0, y: -t.fling_distance, rotate: 0.0 },
            )
        } else {
            snap_back()
        }
    }
}

fn fling(outcome: SwipeOutcome, transform: CardTransform) -> GestureResult {
    tracing::debug!("Gesture classified as {}", outcome.label());
    GestureResult {
        outcome: Some(outcome),
        transform,
    }
}

fn snap_back() -> GestureResult {
    GestureResult {
        outcome: None,
        transform: CardTransform::ORIGIN,
    }
}
