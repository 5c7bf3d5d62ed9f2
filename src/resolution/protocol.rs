//! The shared four-step resolution protocol
//!
//! Every attack runs the same steps in the same order:
//! pre-fire check -> to-hit -> damage calculation -> damage application.
//! Families only change what happens inside a step, through the hooks on
//! `WeaponHandler`.

use crate::catalog::RuleCatalog;
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::dice::{Dice, DiceRoller, RollPurpose};
use crate::game::GameState;
use crate::report::{messages, CombatLog, Report, Subject};
use crate::resolution::attack::AttackDescriptor;
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage;
use crate::resolution::handler::{PreFire, WeaponHandler};
use crate::resolution::outcome::{
    AbortReason, PassResult, PreemptReason, ResolutionOutcome, ResolutionStage,
};

/// Resolves attacks against a fixed catalog and rule set
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c RuleCatalog,
    rules: &'c RulesConfig,
}

impl<'c> Resolver<'c> {
    pub fn new(catalog: &'c RuleCatalog, rules: &'c RulesConfig) -> Self {
        Self { catalog, rules }
    }

    /// Run one resolution pass
    ///
    /// Reports are appended to `log` as they are produced; state mutations
    /// are permanent even if the pass later fails. An error means the
    /// descriptor or a roll was invalid, never a game-rule outcome.
    pub fn resolve(
        &self,
        state: &mut GameState,
        roller: &mut dyn DiceRoller,
        attack: &AttackDescriptor,
        attack_seq: u32,
        log: &mut CombatLog,
    ) -> Result<PassResult> {
        attack.validate(state, self.catalog)?;

        let mut ctx =
            ResolutionContext::new(state, self.catalog, self.rules, attack, roller, log, attack_seq);
        let weapon = ctx.weapon()?;
        let handler = WeaponHandler::for_family(weapon.family);

        let _span = tracing::debug_span!(
            "resolve",
            seq = attack_seq,
            attacker = %attack.attacker,
            target = %attack.target,
            weapon = %weapon.name
        )
        .entered();

        let outcome = run(handler, &mut ctx)?;
        tracing::debug!(?outcome, "Attack resolved");

        Ok(PassResult {
            attack_seq,
            outcome,
            rolls: ctx.finish(),
        })
    }
}

fn run(handler: WeaponHandler, ctx: &mut ResolutionContext<'_>) -> Result<ResolutionOutcome> {
    // ===== STEP 1: PRE-FIRE =====
    if let PreFire::Stop(reason) = pre_fire(handler, ctx)? {
        return Ok(ResolutionOutcome::PreEmpted { reason });
    }
    let shots = fire(handler, ctx)?;

    // ===== STEP 2: TO-HIT =====
    if !to_hit(ctx)? {
        return Ok(ResolutionOutcome::Miss);
    }
    let target = ctx.attack.target;
    if ctx.state.entity(target)?.destroyed {
        ctx.report(
            Report::new(messages::TARGET_ALREADY_DESTROYED, Subject::entity(target))
                .indent(1)
                .add(ctx.entity_name(target)?),
        );
        return Ok(ResolutionOutcome::Aborted {
            stage: ResolutionStage::ToHit,
            reason: AbortReason::TargetDestroyed,
        });
    }

    // ===== STEP 3: DAMAGE CALCULATION =====
    let packets = handler.calculate_damage(ctx, shots)?;

    // ===== STEP 4: DAMAGE APPLICATION =====
    damage::apply_packets(ctx, &packets)?;

    Ok(ResolutionOutcome::Hit {
        hits: packets.len() as u32,
        damage: packets.iter().map(|p| p.amount).sum(),
    })
}

/// Conditions every family checks before its own malfunction roll
fn pre_fire(handler: WeaponHandler, ctx: &mut ResolutionContext<'_>) -> Result<PreFire> {
    let turn = ctx.state.turn;
    let wrecked = ctx.state.entity(ctx.attack.attacker)?.wrecked_before(turn);
    let mount = ctx.state.mount(ctx.attack.attacker, ctx.attack.mount)?;
    let (hit, jammed) = (mount.hit, mount.jammed);

    let blocked = if wrecked {
        Some((messages::ATTACKER_WRECKED, PreemptReason::AttackerDestroyed))
    } else if hit {
        Some((messages::WEAPON_ALREADY_DESTROYED, PreemptReason::WeaponDestroyed))
    } else if jammed {
        Some((messages::WEAPON_ALREADY_JAMMED, PreemptReason::WeaponJammed))
    } else if handler.uses_ammo() && ctx.rounds_available()? == 0 {
        Some((messages::OUT_OF_AMMO, PreemptReason::OutOfAmmo))
    } else {
        None
    };

    if let Some((message, reason)) = blocked {
        let report = Report::new(message, ctx.weapon_subject()).add(ctx.weapon_label()?);
        ctx.report(report);
        return Ok(PreFire::Stop(reason));
    }

    handler.pre_fire_check(ctx)
}

/// Spend ammunition and accrue heat; returns rounds fired
fn fire(handler: WeaponHandler, ctx: &mut ResolutionContext<'_>) -> Result<u32> {
    let shots = handler.shots(ctx)?;
    let (attacker, mount) = (ctx.attack.attacker, ctx.attack.mount);

    if handler.uses_ammo() {
        if let Some(bin) = ctx.attack.ammo {
            ctx.state.consume_ammo(attacker, bin, shots)?;
        }
    }
    ctx.state.record_shots(attacker, mount, shots)?;
    let heat = ctx.weapon()?.heat;
    ctx.state.add_heat(attacker, mount, heat)?;
    Ok(shots)
}

/// Roll 2d6 against the descriptor's to-hit number and report it
fn to_hit(ctx: &mut ResolutionContext<'_>) -> Result<bool> {
    let roll = ctx.roll(RollPurpose::ToHit, Dice::TWO_D6)?;
    let hit = ctx.attack.to_hit.is_hit(roll.value);
    let message = if hit {
        messages::ATTACK_HITS
    } else {
        messages::ATTACK_MISSES
    };

    let report = Report::new(message, ctx.weapon_subject())
        .add(ctx.weapon_label()?)
        .add(ctx.entity_name(ctx.attack.target)?)
        .add(ctx.attack.to_hit.value)
        .add(roll.value);
    ctx.report_roll(report, roll);
    Ok(hit)
}
