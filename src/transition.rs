use glam::{FloatExt, Vec3};

use crate::axis::Axis;
use crate::constants::FADE_DURATION;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionPhase {
    Idle,      // Nothing in flight, fully opaque
    FadingOut, // Old slice going transparent
    FadingIn,  // Target slice bound, coming back to opaque
}

/// Cross-fade between the displayed slice and a newly selected one, advanced
/// by the host once per frame.
///
/// Half of the duration fades out, the target is swapped in, the other half
/// fades back in. Only one transition runs at a time: `begin` while one is in
/// flight is dropped.
#[derive(Debug, Clone)]
pub struct TransitionAnimator<K> {
    phase: TransitionPhase,
    half_duration: f32,
    elapsed: f32,
    opacity: f32,
    target: Option<K>,
}

impl<K: Copy> TransitionAnimator<K> {
    /// `duration` covers both halves.
    pub fn new(duration: f32) -> Self {
        let half_duration = if duration.is_finite() { duration.max(0.0) * 0.5 } else { 0.0 };
        Self {
            phase: TransitionPhase::Idle,
            half_duration,
            elapsed: 0.0,
            opacity: 1.0,
            target: None,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Target still waiting to be swapped in.
    pub fn pending_target(&self) -> Option<K> {
        self.target
    }

    /// Starts fading towards `target`. Returns `false` and changes nothing if
    /// a transition is already running.
    pub fn begin(&mut self, target: K) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.phase = TransitionPhase::FadingOut;
        self.elapsed = 0.0;
        self.target = Some(target);
        true
    }

    /// Replaces the target of a fade that has not reached its swap yet.
    /// Only an axis change calls this, so the swap cannot bring back the old axis.
    pub fn retarget(&mut self, target: K) {
        if self.phase == TransitionPhase::FadingOut {
            self.target = Some(target);
        }
    }

    /// Advances by the frame's elapsed time. Returns the target on the tick
    /// where it must be bound for display.
    pub fn tick(&mut self, dt: f32) -> Option<K> {
        if !self.is_in_flight() {
            return None;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let t = if self.half_duration > 0.0 {
            (self.elapsed / self.half_duration).min(1.0)
        } else {
            1.0
        };
        let done = self.elapsed >= self.half_duration;

        match self.phase {
            TransitionPhase::FadingOut => {
                self.opacity = 1.0_f32.lerp(0.0, t);
                if done {
                    self.phase = TransitionPhase::FadingIn;
                    self.elapsed = 0.0;
                    return self.target.take();
                }
            }
            TransitionPhase::FadingIn => {
                self.opacity = 0.0_f32.lerp(1.0, t);
                if done {
                    self.phase = TransitionPhase::Idle;
                    self.elapsed = 0.0;
                    self.opacity = 1.0;
                }
            }
            TransitionPhase::Idle => {}
        }
        None
    }
}

impl<K: Copy> Default for TransitionAnimator<K> {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

/// Moves the display plane along the active axis as the index changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneOffset {
    pub resting: Vec3,
    pub step_size: f32,
}

impl PlaneOffset {
    pub fn new(resting: Vec3, step_size: f32) -> Self {
        Self { resting, step_size }
    }

    pub fn position(&self, axis: Axis, index: usize) -> Vec3 {
        self.resting + axis.unit() * (self.step_size * index as f32)
    }
}
