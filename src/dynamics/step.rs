use crate::collision::bsp::test_world;
use crate::core::entities::Ball;
use crate::core::World;
use crate::dynamics::paths::step_bodies;
use crate::dynamics::pendulum::pendulum_step;
use crate::dynamics::switches::step_switches;
use crate::math::Vector3;

/// Velocity reflection coefficient; the sub-elastic 1.7 (rather than the
/// nominal 2.0) gives a restitution of about 0.7
const RESTITUTION: f32 = 1.7;

/// A contact landing sooner than this under a gravity-direction probe
/// means the ball is resting on a surface
const PROBE_TIME: f32 = 0.0005;

/// Minimum cosine between the contact offset and gravity for the rolling
/// friction branch
const REST_ALIGNMENT: f32 = 0.999;

/// Hard bound on contacts resolved per frame
const MAX_CONTACTS: u32 = 16;

/// Advances the world by one tick of `dt` seconds under gravity `g`,
/// resolving collisions for ball `ui`
///
/// Returns the largest normal closing speed among the frame's contacts,
/// used by callers as the bounce sound amplitude. When `rest_counter` is
/// supplied, rolling friction is applied to a ball sitting on a surface
/// facing gravity, and the counter is incremented on every frame friction
/// holds the ball at a standstill. An out-of-range ball index leaves the
/// world untouched.
pub fn step(
    world: &mut World,
    g: Vector3,
    dt: f32,
    ui: usize,
    mut rest_counter: Option<&mut u32>,
) -> f32 {
    let mut loudest = 0.0_f32;
    let mut tt = dt;

    if ui >= world.balls.len() {
        return loudest;
    }

    // Pre-step velocity, kept for the pendulum's net velocity change.
    let initial_v = world.balls[ui].v;
    let v = initial_v;

    // Probe along the gravity direction for a surface the ball rests on.
    world.balls[ui].v = g;

    let mut resting = false;

    if let Some(counter) = rest_counter.as_deref_mut() {
        let probe_ball = world.balls[ui];
        let probe = test_world(world, tt, &probe_ball);

        if probe.t < PROBE_TIME && probe.t < tt {
            let ball = &mut world.balls[ui];
            ball.v = v;

            let r = probe.point - ball.p;
            let alignment = r.dot(&g) / (r.length() * g.length());

            if alignment > REST_ALIGNMENT {
                resting = true;
                let speed = ball.v.length() - dt;

                if speed > 0.0 {
                    // Rolling friction: shave the linear speed, re-derive
                    // the spin from the surface slip.
                    ball.v = ball.v.normalize() * speed;

                    let slip = probe.velocity - ball.v;
                    ball.w = slip.cross(&r) * (-1.0 / (ball.r * ball.r));
                } else {
                    // Friction has brought the ball to a stop.
                    ball.v = Vector3::zero();
                    *counter += 1;
                }
            }
        }
    }

    if !resting {
        world.balls[ui].v = v.mad(&g, tt);
    }

    // Resolve contacts until the slice is clean. A ball pinched between two
    // closing solids could re-contact forever; past the iteration budget the
    // rest of the frame is abandoned rather than locking up.
    let mut budget = MAX_CONTACTS;

    while budget > 0 && tt > 0.0 {
        let ball = world.balls[ui];
        let contact = test_world(world, tt, &ball);

        if contact.t >= tt {
            break;
        }

        step_bodies(world, contact.t);
        step_switches(world, contact.t);
        step_balls(world, contact.t);

        tt -= contact.t;

        let energy = bounce(&mut world.balls[ui], contact.point, contact.velocity);
        if loudest < energy {
            loudest = energy;
        }

        budget -= 1;
    }

    step_bodies(world, tt);
    step_switches(world, tt);
    step_balls(world, tt);

    // The ball's net velocity change over the frame drives the pendulum.
    let delta_v = world.balls[ui].v - initial_v;
    pendulum_step(&mut world.balls[ui], delta_v, g, dt);

    loudest
}

/// Reflects a ball off the surface it just struck
///
/// `q` is the contact point and `w` the velocity of the struck surface.
/// Updates the ball's spin from the relative contact velocity, reflects the
/// normal velocity component with restitution, and re-projects the center
/// one radius off the contact to remove residual penetration. Returns the
/// normal closing speed of the impact.
fn bounce(ball: &mut Ball, q: Vector3, w: Vector3) -> f32 {
    let r = ball.p - q;
    let d = ball.v - w;
    let n = r.normalize();

    ball.w = d.cross(&r) * (-1.0 / (ball.r * ball.r));

    let vn = ball.v.dot(&n);
    let wn = w.dot(&n);

    ball.v = ball.v.mad(&n, RESTITUTION * (wn - vn));
    ball.p = q.mad(&n, ball.r);

    n.dot(&d).abs()
}

/// Advances every ball along its velocity and spins its render basis
pub fn step_balls(world: &mut World, dt: f32) {
    for ball in world.balls.iter_mut() {
        let w = ball.w;

        ball.p = ball.p.mad(&ball.v, dt);
        ball.basis.rotate(w, dt);
    }
}
