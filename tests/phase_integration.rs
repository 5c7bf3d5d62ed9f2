//! Integration tests for firing phases over a shared game state

use std::path::Path;

use mech_gunnery::catalog::{load_catalog, RuleCatalog};
use mech_gunnery::core::types::{AmmoBinId, EntityId, MountId};
use mech_gunnery::core::{EngineConfig, RulesConfig};
use mech_gunnery::dice::{ScriptedRoller, SeededRoller};
use mech_gunnery::game::{AmmoBin, DamageMode, Entity, GameState, Location, Scenario, WeaponMount};
use mech_gunnery::report::messages;
use mech_gunnery::resolution::{
    AbortReason, AttackDescriptor, PreemptReason, ResolutionOutcome, ResolutionStage,
};

const ATLAS: EntityId = EntityId(1);
const LOCUST: EntityId = EntityId(2);

fn setup() -> (GameState, RuleCatalog) {
    let atlas = Entity::test_mech(ATLAS, "Atlas")
        .with_mount(WeaponMount::new(MountId(1), "AC/10", Location::RightTorso))
        .with_mount(WeaponMount::new(MountId(2), "Medium Laser", Location::RightArm))
        .with_bin(AmmoBin::new(AmmoBinId(1), "AC/10 Ammo", Location::RightTorso, 10));
    let locust = Entity::test_mech(LOCUST, "Locust")
        .with_mount(WeaponMount::new(MountId(1), "Medium Laser", Location::CenterTorso));
    (GameState::from_entities([atlas, locust]), RuleCatalog::standard())
}

#[test]
fn test_earlier_kill_aborts_later_attack() {
    let (mut state, catalog) = setup();
    let rules = RulesConfig::default();
    state
        .apply_damage(LOCUST, Location::Head, 9, DamageMode::Standard)
        .unwrap();

    state
        .declare_attack(
            AttackDescriptor::new(ATLAS, LOCUST, MountId(1), 8).with_ammo(AmmoBinId(1)),
            &catalog,
        )
        .unwrap();
    state
        .declare_attack(AttackDescriptor::new(ATLAS, LOCUST, MountId(2), 8), &catalog)
        .unwrap();

    // autocannon hits the head (12) and kills; laser then hits a wreck
    let mut roller = ScriptedRoller::new([9, 12, 9]);
    let summary = state.resolve_phase(&catalog, &rules, &mut roller).unwrap();

    assert!(state.entity(LOCUST).unwrap().destroyed);
    assert!(summary.attacks[0].result.outcome.is_hit());
    assert_eq!(
        summary.attacks[1].result.outcome,
        ResolutionOutcome::Aborted {
            stage: ResolutionStage::ToHit,
            reason: AbortReason::TargetDestroyed
        }
    );
    let ids: Vec<u32> = summary.reports.iter().map(|r| r.message_id).collect();
    assert_eq!(
        ids,
        vec![
            messages::ATTACK_HITS,
            messages::HIT_LOCATION,
            messages::STRUCTURE_DAMAGE,
            messages::LOCATION_DESTROYED,
            messages::ENTITY_DESTROYED,
            messages::ATTACK_HITS,
            messages::TARGET_ALREADY_DESTROYED,
        ]
    );
    assert!(summary.reports[..5].iter().all(|r| r.attack_seq == 0));
    assert!(summary.reports[5..].iter().all(|r| r.attack_seq == 1));
}

#[test]
fn test_attacker_killed_this_turn_still_fires() {
    let (mut state, catalog) = setup();
    let rules = RulesConfig::default();
    state
        .apply_damage(LOCUST, Location::Head, 9, DamageMode::Standard)
        .unwrap();
    state
        .declare_attack(
            AttackDescriptor::new(ATLAS, LOCUST, MountId(1), 8).with_ammo(AmmoBinId(1)),
            &catalog,
        )
        .unwrap();
    state
        .declare_attack(AttackDescriptor::new(LOCUST, ATLAS, MountId(1), 8), &catalog)
        .unwrap();

    // autocannon kills the Locust through the head; its laser answers anyway
    let mut roller = ScriptedRoller::new([9, 12, 9, 7]);
    let summary = state.resolve_phase(&catalog, &rules, &mut roller).unwrap();

    assert!(state.entity(LOCUST).unwrap().destroyed);
    assert_eq!(
        summary.attacks[1].result.outcome,
        ResolutionOutcome::Hit { hits: 1, damage: 5 }
    );
    assert_eq!(
        state.entity(ATLAS).unwrap().location(Location::CenterTorso).armor,
        15
    );
}

#[test]
fn test_wreck_cannot_fire_in_later_turns() {
    let (mut state, catalog) = setup();
    let rules = RulesConfig::default();
    state
        .apply_damage(LOCUST, Location::Head, 3, DamageMode::Internal)
        .unwrap();
    state.end_turn();
    state.end_turn();

    state
        .declare_attack(AttackDescriptor::new(LOCUST, ATLAS, MountId(1), 8), &catalog)
        .unwrap();
    let mut roller = ScriptedRoller::new([9, 7]);
    let summary = state.resolve_phase(&catalog, &rules, &mut roller).unwrap();

    assert_eq!(
        summary.attacks[0].result.outcome,
        ResolutionOutcome::PreEmpted {
            reason: PreemptReason::AttackerDestroyed
        }
    );
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].message_id, messages::ATTACKER_WRECKED);
    assert_eq!(
        summary.reports[0].render(),
        "Locust's Medium Laser cannot fire: its unit was destroyed in an earlier turn."
    );
    assert_eq!(roller.consumed(), 0);
    assert_eq!(state.entity(ATLAS).unwrap().location(Location::CenterTorso).armor, 20);
    assert_eq!(state.entity(LOCUST).unwrap().heat, 0);
}

#[test]
fn test_log_grows_across_turns() {
    let (mut state, catalog) = setup();
    let rules = RulesConfig::default();

    state
        .declare_attack(AttackDescriptor::new(ATLAS, LOCUST, MountId(2), 8), &catalog)
        .unwrap();
    state
        .resolve_phase(&catalog, &rules, &mut ScriptedRoller::new([4]))
        .unwrap();
    let first_turn = state.log().clone();
    state.end_turn();

    state
        .declare_attack(AttackDescriptor::new(ATLAS, LOCUST, MountId(2), 8), &catalog)
        .unwrap();
    let summary = state
        .resolve_phase(&catalog, &rules, &mut ScriptedRoller::new([10, 7]))
        .unwrap();

    assert_eq!(summary.turn, 1);
    assert!(first_turn.is_prefix_of(state.log()));
    assert_eq!(state.log().len(), first_turn.len() + summary.reports.len());
    // entity heat keeps accumulating; only the mount's per-turn accrual restarts
    assert_eq!(state.entity(ATLAS).unwrap().heat, 6);
    assert_eq!(
        state.mount(ATLAS, MountId(2)).unwrap().heat_this_turn,
        3
    );
}

#[test]
fn test_seeded_duel_is_reproducible() {
    let catalog = RuleCatalog::standard();
    let rules = RulesConfig::default();
    let run = |seed: u64| {
        let mut state = Scenario::load(Path::new("data/scenarios/duel.json"))
            .unwrap()
            .into_state(&catalog)
            .unwrap();
        let mut roller = SeededRoller::new(seed);
        state.resolve_phase(&catalog, &rules, &mut roller).unwrap();
        state
    };

    let a = run(42);
    let b = run(42);
    assert_eq!(a.log(), b.log());
    assert_eq!(a.entities(), b.entities());
    assert_eq!(a.pending_count(), 0);
}

#[test]
fn test_bundled_data_files_load() {
    let catalog = load_catalog(Path::new("data/catalog.toml")).unwrap();
    assert!(catalog.weapon("Caseless AC/10").is_ok());
    assert!(catalog.ammo("AC/10 Caseless Ammo").is_ok());

    let config = EngineConfig::load(Path::new("data/gunnery.toml")).unwrap();
    assert!(config.rules.validate().is_ok());

    let state = Scenario::load(Path::new("data/scenarios/duel.json"))
        .unwrap()
        .into_state(&catalog)
        .unwrap();
    assert_eq!(state.pending_count(), 5);
}
