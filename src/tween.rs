//! Mask fade driver: the tween collaborator behind select/deselect.
//!
//! Selecting or deselecting a field cross-fades an auxiliary mask scalar
//! that the shading stage reads as a uniform. The fade runs on its own
//! mechanism, decoupled from the per-particle relaxation; the field only
//! issues cancel-then-start commands. [`MaskDriver`] is the seam for
//! plugging in a host tween engine, and [`MaskFade`] is the built-in
//! implementation used when none is injected.

/// Driver for the tweened mask scalar.
///
/// Implementations must apply last-call-wins semantics: a `fade_to` while
/// a fade is in flight replaces it, starting from the current output
/// value. Fades are never queued.
pub trait MaskDriver {
    /// Cancel any in-flight fade, freezing the mask at its current value.
    fn cancel(&mut self);

    /// Start a fade from the current value toward `target` over `duration`
    /// seconds, shaped by `curve` (see [`crate::easing`]).
    fn fade_to(&mut self, target: f32, duration: f32, curve: fn(f32) -> f32);

    /// Advance the fade by `delta` seconds.
    fn advance(&mut self, delta: f32);

    /// Current mask value.
    fn value(&self) -> f32;
}

/// Built-in scalar fade with easing.
///
/// Starts at 0.0, matching the mask uniform's initial value.
pub struct MaskFade {
    start: f32,
    target: f32,
    current: f32,
    elapsed: f32,
    duration: f32,
    curve: fn(f32) -> f32,
    active: bool,
}

impl MaskFade {
    /// Create an idle fade holding 0.0.
    pub fn new() -> Self {
        Self {
            start: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed: 0.0,
            duration: 0.0,
            curve: crate::easing::linear,
            active: false,
        }
    }

    /// Whether a fade is currently in flight.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for MaskFade {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskDriver for MaskFade {
    fn cancel(&mut self) {
        self.active = false;
    }

    fn fade_to(&mut self, target: f32, duration: f32, curve: fn(f32) -> f32) {
        self.start = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.duration = duration;
        self.curve = curve;
        if duration <= 0.0 {
            self.current = target;
            self.active = false;
        } else {
            self.active = true;
        }
    }

    fn advance(&mut self, delta: f32) {
        if !self.active {
            return;
        }
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.current = self.target;
            self.active = false;
            return;
        }
        let t = (self.curve)(self.elapsed / self.duration);
        self.current = self.start + (self.target - self.start) * t;
    }

    fn value(&self) -> f32 {
        self.current
    }
}
