use crate::core::World;
use crate::dynamics::paths::set_path_cycle;

/// Advances every running switch countdown by `dt` seconds
///
/// A countdown crossing zero clamps to exactly zero, resets every path in
/// the cycle rooted at the switch's path to the default enable state, and
/// returns the switch itself to its default.
pub fn step_switches(world: &mut World, dt: f32) {
    let World { switches, paths, .. } = world;

    for sw in switches.iter_mut() {
        if sw.t > 0.0 {
            sw.t -= dt;

            if sw.t <= 0.0 {
                sw.t = 0.0;

                set_path_cycle(paths, sw.path, sw.f0);
                sw.f = sw.f0;
            }
        }
    }
}
