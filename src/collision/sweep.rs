use crate::math::Vector3;

/// Sentinel contact time standing for "no hit"
pub const LARGE: f32 = 1.0e+5;

/// General small-quantity epsilon
pub const SMALL: f32 = 1.0e-3;

/// Result of sweeping the ball against a single moving primitive
#[derive(Debug, Clone, Copy)]
pub struct SweepHit {
    /// Earliest time of surface contact; `LARGE` when there is none
    pub t: f32,

    /// Contact point in world space, valid only for a hit
    pub point: Vector3,
}

impl SweepHit {
    /// The no-hit result
    #[inline]
    pub fn miss() -> Self {
        Self { t: LARGE, point: Vector3::zero() }
    }
}

/// Solves `|p + t v| = r` for the smallest admissible `t`
///
/// Returns `LARGE` for a negative discriminant or a strictly negative
/// smaller root. A zero discriminant returns `-b / 2a` unfiltered; the
/// caller decides whether a negative time is meaningful. The division is
/// performed even when `a` is zero: the resulting infinity or NaN fails
/// every downstream comparison, whereas guarding the case was observed to
/// drop legitimate low-velocity contacts.
fn solve_contact(p: Vector3, v: Vector3, r: f32) -> f32 {
    let a = v.dot(&v);
    let b = v.dot(&p) * 2.0;
    let c = p.dot(&p) - r * r;
    let d = b * b - 4.0 * a * c;

    if d < 0.0 {
        LARGE
    } else if d > 0.0 {
        let t0 = 0.5 * (-b - d.sqrt()) / a;
        let t1 = 0.5 * (-b + d.sqrt()) / a;
        let t = t0.min(t1);

        if t < 0.0 {
            LARGE
        } else {
            t
        }
    } else {
        -b * 0.5 / a
    }
}

/// Sweeps a moving sphere against a moving point
///
/// The sphere has radius `r` and moves along `v` from `p`. The point moves
/// along `w` from `q` in a coordinate system based at `o`. Only an
/// approaching sphere can hit.
pub fn sweep_vert(
    o: Vector3,
    q: Vector3,
    w: Vector3,
    p: Vector3,
    v: Vector3,
    r: f32,
) -> SweepHit {
    let origin = o + q;
    let rel_p = p - origin;
    let rel_v = v - w;

    if rel_p.dot(&rel_v) < 0.0 {
        let t = solve_contact(rel_p, rel_v, r);

        if t < LARGE {
            return SweepHit { t, point: origin.mad(&w, t) };
        }
    }
    SweepHit::miss()
}

/// Sweeps a moving sphere against a moving segment
///
/// The sphere has radius `r` and moves along `v` from `p`. The segment
/// starts at `q` in a coordinate system based at `o`, extends along `u`,
/// and moves along `w`. A hit must fall strictly within the segment.
pub fn sweep_edge(
    o: Vector3,
    q: Vector3,
    u: Vector3,
    w: Vector3,
    p: Vector3,
    v: Vector3,
    r: f32,
) -> SweepHit {
    let d = p - o - q;
    let e = v - w;

    let du = d.dot(&u);
    let eu = e.dot(&u);
    let uu = u.dot(&u);

    // Remove the components parallel to the segment; the sweep reduces to a
    // circle test in the orthogonal plane.
    let rel_p = d.mad(&u, -du / uu);
    let rel_v = e.mad(&u, -eu / uu);

    let t = solve_contact(rel_p, rel_v, r);
    let s = (du + eu * t) / uu;

    if 0.0 <= t && t < LARGE && 0.0 < s && s < 1.0 {
        let point = q.mad(&u, s) + o.mad(&w, t);
        SweepHit { t, point }
    } else {
        SweepHit::miss()
    }
}

/// Sweeps a moving sphere against a moving plane
///
/// The sphere has radius `r` and moves along `v` from `p`. The plane has
/// normal `n` at distance `d` from the origin `o` of a frame moving along
/// `w`. A sphere already slightly through the surface but with its center
/// on the near side reports an instant contact at `t = 0`.
pub fn sweep_side(
    o: Vector3,
    w: Vector3,
    n: Vector3,
    d: f32,
    p: Vector3,
    v: Vector3,
    r: f32,
) -> SweepHit {
    let vn = v.dot(&n);
    let wn = w.dot(&n);

    if vn - wn <= 0.0 {
        let on = o.dot(&n);
        let pn = p.dot(&n);

        let u = (r + d + on - pn) / (vn - wn);
        let a = (d + on - pn) / (vn - wn);

        let t = if u >= 0.0 {
            u
        } else if a >= 0.0 {
            0.0
        } else {
            return SweepHit::miss();
        };

        let point = p.mad(&v, t).mad(&n, -r);
        return SweepHit { t, point };
    }
    SweepHit::miss()
}
