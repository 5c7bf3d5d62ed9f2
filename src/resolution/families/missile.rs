//! Missile racks

use crate::core::error::Result;
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage::DamagePacket;
use crate::resolution::families::cluster_volley;

/// Cluster roll over the rack, then one location roll per missile group
pub fn damage(ctx: &mut ResolutionContext<'_>) -> Result<Vec<DamagePacket>> {
    let weapon = ctx.weapon()?;
    cluster_volley(ctx, weapon.rack_size, weapon.damage, weapon.cluster_group)
}
