//! Kinematic integration: position += velocity * dt.

use hecs::World;

use lighthouse_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f64) {
    let dt = dt as f32;
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}
