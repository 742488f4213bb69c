//! Easing curves for the mask cross-fade.
//!
//! Plain functions mapping normalized progress `t` in 0..=1 to an eased
//! value, with `f(0) = 0` and `f(1) = 1`. Pass one to
//! [`MaskDriver::fade_to`](crate::tween::MaskDriver::fade_to).

/// Identity curve.
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-out.
pub fn quad_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Quartic ease-in.
pub fn quartic_in(t: f32) -> f32 {
    t * t * t * t
}

/// Quartic ease-out: fast start, long settle.
///
/// The curve used by the select/deselect mask fade.
pub fn quartic_out(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u * u
}
