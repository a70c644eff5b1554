//! One-shot tween timeline used for the camera intro.
//!
//! Tweens are `fromTo` style: before a tween starts its `from` value is
//! reported, after it ends its `to` value. The timeline is built paused and
//! only moves once `play` is called; it never loops or replays.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in.
    Power1In,
    /// Quadratic ease-out.
    Power1Out,
    /// Quadratic ease-in-out.
    Power1InOut,
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1In => t * t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Property a tween drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenTarget {
    CameraZ,
    TitleOpacity,
}

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub target: TweenTarget,
    pub from: f32,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Value of the tweened property at timeline time `time`.
    pub fn value_at(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return if time >= self.start { self.to } else { self.from };
        }
        let t = (time - self.start) / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
    Finished,
}

pub type Samples = SmallVec<[(TweenTarget, f32); 4]>;

/// Accumulated frame deltas within this many seconds of the end count as
/// finished.
const END_EPSILON: f32 = 1e-4;

#[derive(Clone, Debug)]
pub struct Timeline {
    tweens: SmallVec<[Tween; 4]>,
    time: f32,
    state: PlayState,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::paused()
    }
}

impl Timeline {
    pub fn paused() -> Self {
        Self {
            tweens: SmallVec::new(),
            time: 0.0,
            state: PlayState::Paused,
        }
    }

    /// Append a tween after the current end of the timeline.
    pub fn append(
        &mut self,
        target: TweenTarget,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        let start = self.duration();
        self.insert(start, target, from, to, duration, ease)
    }

    /// Insert a tween at an absolute start time.
    pub fn insert(
        &mut self,
        start: f32,
        target: TweenTarget,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        self.tweens.push(Tween {
            target,
            from,
            to,
            start: start.max(0.0),
            duration: duration.max(0.0),
            ease,
        });
        self
    }

    /// Total length: the end of the latest tween.
    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn state(&self) -> PlayState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        let d = self.duration();
        if d <= 0.0 {
            return if self.state == PlayState::Finished { 1.0 } else { 0.0 };
        }
        (self.time / d).clamp(0.0, 1.0)
    }

    /// Start playback. A finished timeline stays finished.
    pub fn play(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Playing;
        }
    }

    /// Advance by `dt` seconds while playing and return the sampled values.
    /// Returns nothing while paused or finished.
    pub fn advance(&mut self, dt: f32) -> Samples {
        if self.state != PlayState::Playing {
            return Samples::new();
        }
        let duration = self.duration();
        self.time = (self.time + dt.max(0.0)).min(duration);
        if self.time >= duration - END_EPSILON {
            self.time = duration;
            self.state = PlayState::Finished;
        }
        self.sample()
    }

    /// Values of every tween at the current time.
    pub fn sample(&self) -> Samples {
        self.tweens
            .iter()
            .map(|tw| (tw.target, tw.value_at(self.time)))
            .collect()
    }
}
