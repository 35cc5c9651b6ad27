use crate::collision::sweep::{self, SweepHit};
use crate::core::entities::{Ball, Body, Lump, LumpFlags, Node, Side};
use crate::core::World;
use crate::dynamics::paths;
use crate::math::Vector3;

/// The earliest contact found between a ball and the level geometry
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Time of impact; equal to the queried `dt` when nothing is struck
    pub t: f32,

    /// Contact point in world space
    pub point: Vector3,

    /// Velocity of the struck surface
    pub velocity: Vector3,
}

/// Sweeps the ball against one side of a lump, clipped to the lump
///
/// A candidate on the side's infinite plane is rejected unless it lies
/// inside every other half-space of the lump at the moment of contact.
fn test_side(
    world: &World,
    dt: f32,
    ball: &Ball,
    lump: &Lump,
    slot: usize,
    o: Vector3,
    w: Vector3,
) -> SweepHit {
    let si = world.lump_side_index(lump, slot);
    let side = &world.sides[si];
    let hit = sweep::sweep_side(o, w, side.n, side.d, ball.p, ball.v, ball.r);

    if hit.t < dt {
        for other in 0..lump.sc {
            let qi = world.lump_side_index(lump, other);
            if qi == si {
                continue;
            }
            let sq = &world.sides[qi];

            if hit.point.dot(&sq.n) - o.dot(&sq.n) - w.dot(&sq.n) * hit.t > sq.d {
                return SweepHit::miss();
            }
        }
    }
    hit
}

/// Finds the earliest contact between the ball and one lump
///
/// Returns `t = dt` when nothing is struck within the slice. Vertices are
/// tested first, then edges, then sides, in pool order; the order is part
/// of the replay contract. A zero-radius ball touches only sides.
fn test_lump(world: &World, dt: f32, ball: &Ball, lump: &Lump, o: Vector3, w: Vector3) -> SweepHit {
    let mut best = SweepHit { t: dt, point: Vector3::zero() };

    if lump.flags.contains(LumpFlags::DETAIL) {
        return best;
    }

    if ball.r > 0.0 {
        for i in 0..lump.vc {
            let vert = world.lump_vert(lump, i);
            let hit = sweep::sweep_vert(o, vert.p, w, ball.p, ball.v, ball.r);

            if hit.t < best.t {
                best = hit;
            }
        }

        for i in 0..lump.ec {
            let edge = world.lump_edge(lump, i);
            let q = world.verts[edge.vi].p;
            let u = world.verts[edge.vj].p - q;
            let hit = sweep::sweep_edge(o, q, u, w, ball.p, ball.v, ball.r);

            if hit.t < best.t {
                best = hit;
            }
        }
    }

    for i in 0..lump.sc {
        let hit = test_side(world, best.t, ball, lump, i, o, w);

        if hit.t < best.t {
            best = hit;
        }
    }
    best
}

/// Returns true if the ball is, now or within `dt`, not strictly behind
/// the splitting plane
fn test_fore(dt: f32, ball: &Ball, side: &Side, o: Vector3) -> bool {
    let q = ball.p - o;

    if q.dot(&side.n) - side.d + ball.r >= 0.0 {
        return true;
    }

    let q = q.mad(&ball.v, dt);

    q.dot(&side.n) - side.d + ball.r >= 0.0
}

/// Returns true if the ball is, now or within `dt`, not strictly in front
/// of the splitting plane
fn test_back(dt: f32, ball: &Ball, side: &Side, o: Vector3) -> bool {
    let q = ball.p - o;

    if q.dot(&side.n) - side.d - ball.r <= 0.0 {
        return true;
    }

    let q = q.mad(&ball.v, dt);

    q.dot(&side.n) - side.d - ball.r <= 0.0
}

/// Recursively finds the earliest contact in a BSP sub-tree
///
/// Both children are visited when the ball straddles the splitting plane.
fn test_node(world: &World, dt: f32, ball: &Ball, node: &Node, o: Vector3, w: Vector3) -> SweepHit {
    let mut best = SweepHit { t: dt, point: Vector3::zero() };

    for i in 0..node.lc {
        let lump = &world.lumps[node.l0 + i];
        let hit = test_lump(world, best.t, ball, lump, o, w);

        if hit.t < best.t {
            best = hit;
        }
    }

    if let (Some(si), Some(ni)) = (node.si, node.fore) {
        if test_fore(best.t, ball, &world.sides[si], o) {
            let hit = test_node(world, best.t, ball, &world.nodes[ni], o, w);

            if hit.t < best.t {
                best = hit;
            }
        }
    }

    if let (Some(si), Some(nj)) = (node.si, node.back) {
        if test_back(best.t, ball, &world.sides[si], o) {
            let hit = test_node(world, best.t, ball, &world.nodes[nj], o, w);

            if hit.t < best.t {
                best = hit;
            }
        }
    }

    best
}

/// Finds the earliest contact between the ball and one body
///
/// The body's position and velocity are evaluated once and passed down as
/// the moving support frame; the geometry itself stays in body-local
/// coordinates.
pub fn test_body(world: &World, dt: f32, ball: &Ball, body: &Body) -> Contact {
    let o = paths::body_position(world, body);
    let w = paths::body_velocity(world, body);

    let hit = test_node(world, dt, ball, &world.nodes[body.node], o, w);
    let velocity = if hit.t < dt { w } else { Vector3::zero() };

    Contact { t: hit.t, point: hit.point, velocity }
}

/// Finds the earliest contact between the ball and the whole level
///
/// Returns `t = dt` when nothing is struck within the slice; the struck
/// surface's velocity rides along for the bounce response.
pub fn test_world(world: &World, dt: f32, ball: &Ball) -> Contact {
    let mut best = Contact { t: dt, point: Vector3::zero(), velocity: Vector3::zero() };

    for body in &world.bodies {
        let contact = test_body(world, best.t, ball, body);

        if contact.t < best.t {
            best = contact;
        }
    }
    best
}
