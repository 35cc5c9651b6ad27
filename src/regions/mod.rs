//! Cylinder and radius predicates for items, goals, teleporters, and
//! switches
//!
//! All predicates test the ball's current position and radius against
//! upright cylinders; the vertical extent of each region kind is a
//! game-wide constant shared with the renderer.

use crate::core::entities::ItemKind;
use crate::core::World;
use crate::dynamics::paths::set_path_cycle;
use crate::math::Vector3;

/// Vertical extent of a goal region
pub const GOAL_HEIGHT: f32 = 3.0;

/// Vertical extent of a teleporter region
pub const JUMP_HEIGHT: f32 = 2.0;

/// Vertical extent of a switch region
pub const SWCH_HEIGHT: f32 = 2.0;

/// Where the ball stands relative to the teleporters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpState {
    /// Not inside any teleporter
    Outside,

    /// Fully enclosed; the caller should teleport to the carried
    /// destination
    Inside(Vector3),

    /// Overlapping a teleporter without being fully enclosed
    Border,
}

/// Returns the first untaken item the lead ball touches, with its position
///
/// `item_r` is the pickup radius shared by all items. The caller flips the
/// item kind to [`ItemKind::None`] once the pickup takes effect.
pub fn item_hit(world: &World, item_r: f32) -> Option<(usize, Vector3)> {
    let ball = world.balls.first()?;

    for (hi, item) in world.items.iter().enumerate() {
        let r = ball.p - item.p;

        if item.kind != ItemKind::None && r.length() < ball.r + item_r {
            return Some((hi, item.p));
        }
    }
    None
}

/// Returns the first goal wholly containing ball `ui`, with its position
pub fn goal_hit(world: &World, ui: usize) -> Option<(usize, Vector3)> {
    let ball = world.balls.get(ui)?;

    for (zi, goal) in world.goals.iter().enumerate() {
        let r = Vector3::new(ball.p.x - goal.p.x, ball.p.z - goal.p.z, 0.0);

        if r.length() < goal.r - ball.r
            && ball.p.y > goal.p.y
            && ball.p.y < goal.p.y + GOAL_HEIGHT / 2.0
        {
            return Some((zi, goal.p));
        }
    }
    None
}

/// Classifies ball `ui` against the teleporters
///
/// A fully enclosed ball yields the destination with the ball's offset from
/// the teleporter center preserved. Overlapping a teleporter only at its
/// border keeps scanning, since a later teleporter may enclose the ball
/// outright.
pub fn jump_state(world: &World, ui: usize) -> JumpState {
    let Some(ball) = world.balls.get(ui) else {
        return JumpState::Outside;
    };

    let mut state = JumpState::Outside;

    for jump in &world.jumps {
        let r = Vector3::new(ball.p.x - jump.p.x, ball.p.z - jump.p.z, 0.0);
        let l = r.length() - jump.r;

        if l < 0.0 && ball.p.y > jump.p.y && ball.p.y < jump.p.y + JUMP_HEIGHT / 2.0 {
            if l < -ball.r {
                return JumpState::Inside(jump.q + (ball.p - jump.p));
            }
            state = JumpState::Border;
        }
    }
    state
}

/// Processes switch entry and exit events for ball `ui`
///
/// Entering a switch toggles its state, propagates the new enable flag
/// around the controlled path cycle, and arms the countdown when the state
/// left its default. Returns true only when a visible switch toggled.
/// Switches with a running or pending countdown that already left their
/// default state are inert until the timer restores them. The entered flag
/// debounces timerless switches until the ball leaves the cylinder.
pub fn switch_event(world: &mut World, ui: usize) -> bool {
    let World { switches, paths, balls, .. } = world;

    let Some(ball) = balls.get(ui) else {
        return false;
    };

    let mut toggled = false;

    for sw in switches.iter_mut() {
        if sw.t0 == 0.0 || sw.f == sw.f0 {
            let r = Vector3::new(ball.p.x - sw.p.x, ball.p.z - sw.p.z, 0.0);
            let l = r.length() - sw.r;

            if l < ball.r && ball.p.y > sw.p.y && ball.p.y < sw.p.y + SWCH_HEIGHT / 2.0 {
                if !sw.entered && l < -ball.r {
                    // The ball enters; only timerless switches latch the
                    // entered flag.
                    if sw.t0 == 0.0 {
                        sw.entered = true;
                    }

                    sw.f = !sw.f;
                    set_path_cycle(paths, sw.path, sw.f);

                    // Toggled away from default: start the countdown.
                    if sw.f != sw.f0 {
                        sw.t = sw.t0;
                    }

                    if !sw.invisible {
                        toggled = true;
                    }
                }
            } else if sw.entered {
                sw.entered = false;
            }
        }
    }
    toggled
}
