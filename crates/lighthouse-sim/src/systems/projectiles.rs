//! Projectile flight: advance every live projectile along its direction.

use hecs::World;

use lighthouse_core::components::Projectile;
use lighthouse_core::types::Position;

use crate::projectile;

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, proj)) in world.query_mut::<(&mut Position, &mut Projectile)>() {
        pos.0 += projectile::advance(proj, dt);
    }
}
