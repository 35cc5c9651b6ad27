use crate::core::entities::Ball;
use crate::math::Vector3;

/// Pendulum bob mass
const MASS: f32 = 5.0;

/// Linear coupling between ball acceleration and bob force
const COUPLING: f32 = 0.5;

/// Per-step angular velocity damping
const DAMPING: f32 = 0.995;

/// Updates the angular velocity and orientation of the ball's pendulum
///
/// `accel` is the net velocity change of the ball over the frame and `g`
/// the gravity vector. The bob hangs one ball radius below the center
/// along the frame's second axis. Purely cosmetic, but replays depend on
/// the exact sequence of operations here.
pub fn pendulum_step(ball: &mut Ball, accel: Vector3, g: Vector3, dt: f32) {
    // Total force on the bob over the frame.
    let a = (accel * COUPLING).mad(&g, -dt);
    let f = a * (MASS / dt);

    // Lever arm from the ball center to the bob.
    let r = ball.pend_basis.axes[1] * -ball.r;

    let torque = if r.dot(&f).abs() > 0.0 {
        f.cross(&r)
    } else {
        Vector3::zero()
    };

    ball.pend_w = ball.pend_w.mad(&torque, dt) * DAMPING;
    ball.pend_basis.rotate(ball.pend_w, dt);

    // A corrective torque turning the bob toward the direction of travel.
    let e1 = ball.pend_basis.axes[1];
    let e2 = ball.pend_basis.axes[2];

    let v = ball.v.mad(&e1, ball.v.dot(&e1));
    let y = e1 * (2.0 * v.cross(&e2).dot(&e1));

    ball.pend_basis.rotate(y, dt);
}
