//! Weapon family dispatch
//!
//! One variant per family. The protocol calls these hooks at fixed points;
//! each hook matches on the variant and either runs the family override or
//! falls through to the default behavior.

use crate::catalog::WeaponFamily;
use crate::core::error::Result;
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage::DamagePacket;
use crate::resolution::families::{artillery, caseless, direct, missile, ultra};
use crate::resolution::outcome::PreemptReason;

/// Result of a pre-fire check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreFire {
    Proceed,
    Stop(PreemptReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponHandler {
    Autocannon,
    CaselessAutocannon,
    UltraAutocannon,
    Energy,
    Missile,
    Artillery,
}

impl WeaponHandler {
    pub fn for_family(family: WeaponFamily) -> Self {
        match family {
            WeaponFamily::Autocannon => WeaponHandler::Autocannon,
            WeaponFamily::CaselessAutocannon => WeaponHandler::CaselessAutocannon,
            WeaponFamily::UltraAutocannon => WeaponHandler::UltraAutocannon,
            WeaponFamily::Energy => WeaponHandler::Energy,
            WeaponFamily::Missile => WeaponHandler::Missile,
            WeaponFamily::Artillery => WeaponHandler::Artillery,
        }
    }

    pub fn uses_ammo(&self) -> bool {
        !matches!(self, WeaponHandler::Energy)
    }

    /// Step 1: family malfunction check
    pub fn pre_fire_check(&self, ctx: &mut ResolutionContext<'_>) -> Result<PreFire> {
        match self {
            WeaponHandler::CaselessAutocannon => caseless::pre_fire_check(ctx),
            WeaponHandler::UltraAutocannon => ultra::pre_fire_check(ctx),
            WeaponHandler::Energy => Ok(PreFire::Proceed),
            WeaponHandler::Autocannon | WeaponHandler::Missile | WeaponHandler::Artillery => {
                direct::pre_fire_check(ctx)
            }
        }
    }

    /// Rounds fired by this attack
    pub fn shots(&self, ctx: &mut ResolutionContext<'_>) -> Result<u32> {
        match self {
            WeaponHandler::UltraAutocannon => ultra::shots(ctx),
            _ => Ok(1),
        }
    }

    /// Step 3: where the damage goes and how much
    pub fn calculate_damage(
        &self,
        ctx: &mut ResolutionContext<'_>,
        shots: u32,
    ) -> Result<Vec<DamagePacket>> {
        match self {
            WeaponHandler::UltraAutocannon => ultra::damage(ctx, shots),
            WeaponHandler::Missile => missile::damage(ctx),
            WeaponHandler::Artillery => artillery::damage(ctx),
            WeaponHandler::Autocannon
            | WeaponHandler::CaselessAutocannon
            | WeaponHandler::Energy => direct::single_hit(ctx),
        }
    }
}
