use crate::core::entities::{Body, Path};
use crate::core::World;
use crate::math::Vector3;

/// Hermite ease with zero endpoint derivatives
#[inline]
fn erp(t: f32) -> f32 {
    3.0 * t * t - 2.0 * t * t * t
}

/// Time derivative of [`erp`]
#[inline]
fn derp(t: f32) -> f32 {
    6.0 * t - 6.0 * t * t
}

/// Returns the current world-space position of a body
///
/// A body with no path sits at the origin. The position depends only on the
/// segment phase, so a disabled path leaves the body standing wherever it
/// is in its cycle.
pub fn body_position(world: &World, body: &Body) -> Vector3 {
    match body.path {
        Some(pi) => {
            let p = &world.paths[pi];
            let q = &world.paths[p.next];
            let d = q.p - p.p;

            if p.smooth {
                p.p.mad(&d, erp(body.t / p.t))
            } else {
                p.p.mad(&d, body.t / p.t)
            }
        }
        None => Vector3::zero(),
    }
}

/// Returns the current world-space velocity of a body
///
/// Zero for bodies with no path or a disabled one; otherwise the exact time
/// derivative of [`body_position`].
pub fn body_velocity(world: &World, body: &Body) -> Vector3 {
    match body.path {
        Some(pi) if world.paths[pi].enabled => {
            let p = &world.paths[pi];
            let q = &world.paths[p.next];

            let v = (q.p - p.p) * (1.0 / p.t);

            if p.smooth {
                v * derp(body.t / p.t)
            } else {
                v
            }
        }
        _ => Vector3::zero(),
    }
}

/// Advances every body's path time by `dt` seconds
///
/// A body finishing its segment wraps onto the successor path with its
/// segment time reset to zero. Bodies on disabled paths do not advance.
pub fn step_bodies(world: &mut World, dt: f32) {
    let World { bodies, paths, .. } = world;

    for body in bodies.iter_mut() {
        if let Some(pi) = body.path {
            let p = &paths[pi];

            if p.enabled {
                body.t += dt;

                if body.t >= p.t {
                    body.t = 0.0;
                    body.path = Some(p.next);
                }
            }
        }
    }
}

/// Sets the enable flag on every path of the cycle through `head`
///
/// Tortoise-and-hare traversal: the slow cursor advances one link and the
/// fast cursor two per turn, terminating when they meet. This visits every
/// path of an arbitrary cycle without a visited set.
pub fn set_path_cycle(paths: &mut [Path], head: usize, enabled: bool) {
    let mut slow = head;
    let mut fast = head;

    loop {
        paths[slow].enabled = enabled;
        paths[fast].enabled = enabled;

        slow = paths[slow].next;
        fast = paths[paths[fast].next].next;

        if slow == fast {
            break;
        }
    }
}
