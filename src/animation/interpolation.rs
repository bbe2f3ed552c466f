//! Stateless interpolation primitives shared by object animation and
//! camera paths.
//!
//! All functions are pure and deterministic for identical inputs. `lerp`
//! is deliberately unclamped so out-of-range `t` extrapolates; the
//! smoothstep family clamps `t` to `[0, 1]` before shaping. The spline and
//! easing functions expect `t` in `[0, 1]` and do not clamp.

use glam::{Quat, Vec3};

/// Linear interpolation between two scalars. Unclamped.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two points. Unclamped.
#[inline]
#[must_use]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Spherical interpolation between two unit quaternions.
#[inline]
#[must_use]
pub fn slerp(a: Quat, b: Quat, t: f32) -> Quat {
    a.slerp(b, t)
}

/// Cubic ease-in-out. Clamps `t` to `[0, 1]`.
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quintic ease-in-out with zero first and second derivatives at the
/// endpoints. Clamps `t` to `[0, 1]`.
#[must_use]
pub fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Uniform Catmull-Rom spline through `p1 → p2`, with `p0` and `p3`
/// shaping the tangents. `t` in `[0, 1]` maps the `p1 → p2` segment.
#[must_use]
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Cubic Hermite spline from `p0` (tangent `m0`) to `p1` (tangent `m1`).
#[must_use]
pub fn cubic_hermite(p0: Vec3, m0: Vec3, p1: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

/// Cubic Bezier curve through `p0 → p3` with control points `p1`, `p2`.
#[must_use]
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;

    uuu * p0 + 3.0 * uu * t * p1 + 3.0 * u * tt * p2 + ttt * p3
}

// ============================================================================
// Easing family
// ============================================================================

#[inline]
#[must_use]
pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
#[must_use]
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

#[must_use]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
#[must_use]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let f = t - 1.0;
    f * f * f + 1.0
}

#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}
