//! Adaptive frame-rate selection driven by dynamic scores.

use log::debug;

/// Steps a target frame rate between discrete tiers based on how much the
/// rendered view is changing.
///
/// The controller is an explicit handle owned by the application loop, not a
/// process-wide singleton: whoever runs the render loop feeds it scores from
/// [`dynamic_score`](crate::dynamic_score) and reads the target rate back.
///
/// Two thresholds form a hysteresis band. A score above the upper threshold
/// (the view is changing a lot) raises the target one tier; a score below
/// the lower threshold drops it one tier; scores inside the band leave the
/// target alone, so a flickering score does not thrash the rate.
///
/// Frame pacing itself (sleeping to hit the target) is the caller's concern.
#[derive(Debug, Clone)]
pub struct FramerateController {
    /// Ascending target rates, e.g. 15/30/60.
    tiers: Vec<f64>,
    current: usize,
    step_down_below: f32,
    step_up_above: f32,
}

impl FramerateController {
    /// Creates a controller over ascending `tiers`, starting at the highest.
    ///
    /// # Panics
    /// Panics if `tiers` is empty or `step_down_below > step_up_above`.
    pub fn new(tiers: Vec<f64>, step_down_below: f32, step_up_above: f32) -> Self {
        assert!(!tiers.is_empty(), "at least one rate tier is required");
        assert!(
            step_down_below <= step_up_above,
            "hysteresis thresholds must be ordered"
        );
        let current = tiers.len() - 1;
        Self {
            tiers,
            current,
            step_down_below,
            step_up_above,
        }
    }

    /// Returns the current target frame rate.
    #[inline]
    pub fn framerate(&self) -> f64 {
        self.tiers[self.current]
    }

    /// Forces the target to the tier closest to `rate`.
    ///
    /// The requested rate itself is not stored: the controller only ever
    /// runs at one of its tiers, so `set_framerate(20.0)` on the default
    /// tiers snaps to 15 and [`framerate`](Self::framerate) reads back
    /// `15.0`. Ties between two tiers resolve to the lower one.
    pub fn set_framerate(&mut self, rate: f64) {
        let (closest, _) = self
            .tiers
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - rate).abs().total_cmp(&(*b - rate).abs()))
            .unwrap_or((self.current, &0.0));
        self.current = closest;
    }

    /// Feeds one frame's dynamic score and returns the (possibly updated)
    /// target rate.
    pub fn observe_score(&mut self, score: f32) -> f64 {
        if score > self.step_up_above && self.current + 1 < self.tiers.len() {
            self.current += 1;
            debug!("score {score} raised target to {} fps", self.framerate());
        } else if score < self.step_down_below && self.current > 0 {
            self.current -= 1;
            debug!("score {score} lowered target to {} fps", self.framerate());
        }
        self.framerate()
    }
}

impl Default for FramerateController {
    /// 15/30/60 fps tiers with a 0.05..0.25 hysteresis band.
    fn default() -> Self {
        Self::new(vec![15.0, 30.0, 60.0], 0.05, 0.25)
    }
}
