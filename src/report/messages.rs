//! Stable report message ids and their English templates
//!
//! Ids are part of the wire contract: clients look templates up by number.
//! Never renumber an existing id. `<data>` placeholders are filled in order
//! from the report's data values.

// Pre-fire
pub const CASELESS_MALFUNCTION: u32 = 3160;
pub const WEAPON_JAMMED: u32 = 3161;
pub const MALFUNCTION_DAMAGED: u32 = 3162;
pub const OUT_OF_AMMO: u32 = 3163;
pub const WEAPON_ALREADY_JAMMED: u32 = 3164;
pub const WEAPON_ALREADY_DESTROYED: u32 = 3165;
pub const ATTACKER_WRECKED: u32 = 3166;

// To-hit
pub const ATTACK_MISSES: u32 = 3170;
pub const ATTACK_HITS: u32 = 3171;
pub const TARGET_ALREADY_DESTROYED: u32 = 3172;
pub const RAPID_FIRE: u32 = 3175;

// Damage calculation
pub const CLUSTER_RESULT: u32 = 3180;
pub const HIT_LOCATION: u32 = 3185;
pub const ARTILLERY_SPLASH: u32 = 3186;

// Damage application and secondary effects
pub const ARMOR_DAMAGE: u32 = 6065;
pub const STRUCTURE_DAMAGE: u32 = 6070;
pub const LOCATION_DESTROYED: u32 = 6075;
pub const EQUIPMENT_LOST: u32 = 6076;
pub const DAMAGE_TRANSFER: u32 = 6080;
pub const ENTITY_DESTROYED: u32 = 6085;
pub const CRITICAL_CHECK: u32 = 6090;
pub const CRITICAL_MOUNT: u32 = 6095;
pub const CRITICAL_AMMO_INERT: u32 = 6096;
pub const CRITICAL_NO_SLOT: u32 = 6097;
pub const AMMO_EXPLOSION: u32 = 6100;
pub const DAMAGE_NO_EFFECT: u32 = 6105;

/// English template for a message id
pub fn template(message_id: u32) -> Option<&'static str> {
    let text = match message_id {
        CASELESS_MALFUNCTION => {
            "<data> suffers a caseless ammunition malfunction: weapon damaged, no explosion."
        }
        WEAPON_JAMMED => "<data> jams!",
        MALFUNCTION_DAMAGED => "<data> malfunctions and is damaged!",
        OUT_OF_AMMO => "<data> is out of ammunition.",
        WEAPON_ALREADY_JAMMED => "<data> is jammed and cannot fire.",
        WEAPON_ALREADY_DESTROYED => "<data> is destroyed and cannot fire.",
        ATTACKER_WRECKED => "<data> cannot fire: its unit was destroyed in an earlier turn.",
        ATTACK_MISSES => "<data> misses <data> (needs <data>, rolls <data>).",
        ATTACK_HITS => "<data> hits <data> (needs <data>, rolls <data>).",
        TARGET_ALREADY_DESTROYED => "<data> is already destroyed; the attack has no effect.",
        RAPID_FIRE => "<data> fires <data> rounds.",
        CLUSTER_RESULT => "<data> of <data> projectiles hit (rolls <data>).",
        HIT_LOCATION => "<data> hit in the <data> (rolls <data>) for <data> damage.",
        ARTILLERY_SPLASH => "<data> is caught in the blast for <data> damage.",
        ARMOR_DAMAGE => "<data> armor takes <data> damage (<data> remaining).",
        STRUCTURE_DAMAGE => "<data> internal structure takes <data> damage (<data> remaining).",
        LOCATION_DESTROYED => "<data> destroyed!",
        EQUIPMENT_LOST => "<data> lost with the <data>.",
        DAMAGE_TRANSFER => "<data> damage transfers to the <data>.",
        ENTITY_DESTROYED => "<data> is destroyed!",
        CRITICAL_CHECK => "Critical check on the <data> (rolls <data>): <data> critical hit(s).",
        CRITICAL_MOUNT => "Critical hit (slot roll <data>): <data> destroyed.",
        CRITICAL_AMMO_INERT => "Critical hit (slot roll <data>): <data> bin destroyed, no explosion.",
        CRITICAL_NO_SLOT => "Critical hit on the <data>, nothing left to damage.",
        AMMO_EXPLOSION => "Critical hit (slot roll <data>): <data> explodes for <data> damage!",
        DAMAGE_NO_EFFECT => "<data> cannot take further damage.",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caseless_id_is_stable() {
        assert_eq!(CASELESS_MALFUNCTION, 3160);
    }

    #[test]
    fn test_every_id_has_template() {
        let ids = [
            CASELESS_MALFUNCTION,
            WEAPON_JAMMED,
            MALFUNCTION_DAMAGED,
            OUT_OF_AMMO,
            WEAPON_ALREADY_JAMMED,
            WEAPON_ALREADY_DESTROYED,
            ATTACKER_WRECKED,
            ATTACK_MISSES,
            ATTACK_HITS,
            TARGET_ALREADY_DESTROYED,
            RAPID_FIRE,
            CLUSTER_RESULT,
            HIT_LOCATION,
            ARTILLERY_SPLASH,
            ARMOR_DAMAGE,
            STRUCTURE_DAMAGE,
            LOCATION_DESTROYED,
            EQUIPMENT_LOST,
            DAMAGE_TRANSFER,
            ENTITY_DESTROYED,
            CRITICAL_CHECK,
            CRITICAL_MOUNT,
            CRITICAL_AMMO_INERT,
            CRITICAL_NO_SLOT,
            AMMO_EXPLOSION,
            DAMAGE_NO_EFFECT,
        ];
        for id in ids {
            assert!(template(id).is_some(), "missing template for {}", id);
        }
        assert!(template(1).is_none());
    }
}
