/// A scroll animation between two positions, driven by the host's clock.
///
/// The tween keeps no timer. Hosts call [`Self::sample`] with the current time on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    /// A zero duration is bumped to 1ms so progress is always defined.
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Linear progress in `0..=1`. Times before `start_ms` count as 0.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return 1.0;
        }
        elapsed as f64 / self.duration_ms as f64
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Scroll position at `now_ms`; exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f64 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        let distance = self.to - self.from;
        (self.from + distance * self.easing.ease(progress)).max(0.0)
    }

    /// Continues from wherever the tween is at `now_ms` toward `new_to`.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), new_to, now_ms, duration_ms, self.easing);
    }
}

/// Easing curves. Every curve maps 0 to 0 and 1 to 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
    /// Fast start, gentle landing. Suits jumps triggered by keyboard or scroll-to.
    EaseOutCubic,
}

impl Easing {
    /// Eased progress for linear progress `t` in `0..=1`.
    pub fn ease(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => (3.0 - 2.0 * t) * t * t,
            Self::EaseInOutCubic if t < 0.5 => 4.0 * cube(t),
            Self::EaseInOutCubic => 1.0 - 4.0 * cube(1.0 - t),
            Self::EaseOutCubic => 1.0 - cube(1.0 - t),
        }
    }
}

fn cube(x: f64) -> f64 {
    x * x * x
}
