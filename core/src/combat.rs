use crate::constants::*;
use crate::types::*;

/// No swing in progress, cooldown elapsed and not stunned.
pub fn can_start_attack(f: &Fighter) -> bool {
    f.attack_cooldown <= 0.0 && f.attack_timer <= 0.0 && f.stunned <= 0.0
}

pub fn start_attack(f: &Fighter, kind: AttackKind) -> Fighter {
    let stats = attack_stats(kind);
    Fighter {
        attack: Some(kind),
        attack_timer: stats.duration,
        attack_cooldown: stats.cooldown,
        attack_hit: false,
        ..*f
    }
}

/// Start punch then kick if requested and allowed. A held punch wins the
/// frame; the kick request is gated out by the swing it just started.
pub fn process_attack_requests(f: &Fighter, input: &FightInput) -> Fighter {
    let mut next = *f;
    if input.punch && can_start_attack(&next) {
        next = start_attack(&next, AttackKind::Punch);
    }
    if input.kick && can_start_attack(&next) {
        next = start_attack(&next, AttackKind::Kick);
    }
    next
}

/// Count down attack, cooldown and stun timers. The swing ends once its timer
/// hits zero; cooldown keeps running independently.
pub fn tick_timers(f: &Fighter, dt: f64) -> Fighter {
    let attack_timer = (f.attack_timer - dt).max(0.0);
    let attack = if attack_timer == 0.0 { None } else { f.attack };
    Fighter {
        attack,
        attack_timer,
        attack_cooldown: (f.attack_cooldown - dt).max(0.0),
        stunned: (f.stunned - dt).max(0.0),
        ..*f
    }
}

fn facing_toward(attacker: &Fighter, defender: &Fighter) -> bool {
    match attacker.facing {
        Facing::Right => defender.x >= attacker.x,
        Facing::Left => defender.x <= attacker.x,
    }
}

/// Resolve one attacker→defender direction. Returns the updated pair.
/// A swing lands at most once; blocking negates both damage and stun.
pub fn resolve_hit(attacker: &Fighter, defender: &Fighter) -> (Fighter, Fighter) {
    let kind = match attacker.attack {
        Some(kind) if !attacker.attack_hit => kind,
        _ => return (*attacker, *defender),
    };
    let stats = attack_stats(kind);
    let distance = (attacker.x - defender.x).abs();

    if distance > stats.range || !facing_toward(attacker, defender) {
        return (*attacker, *defender);
    }

    let (damage, stun) = if defender.is_blocking {
        (0, 0.0)
    } else {
        (stats.damage, HIT_STUN)
    };

    (
        Fighter {
            attack_hit: true,
            ..*attacker
        },
        Fighter {
            health: (defender.health - damage).max(0),
            stunned: stun,
            ..*defender
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(id: FighterId, x: f64, facing: Facing) -> Fighter {
        Fighter::new(id, x, facing)
    }

    fn punching(x: f64, facing: Facing) -> Fighter {
        start_attack(&fighter(FighterId::Player, x, facing), AttackKind::Punch)
    }

    #[test]
    fn attack_table_values() {
        let punch = attack_stats(AttackKind::Punch);
        assert_eq!(punch.range, 70.0);
        assert_eq!(punch.damage, 6);
        assert_eq!(punch.duration, 0.2);
        assert_eq!(punch.cooldown, 0.35);

        let kick = attack_stats(AttackKind::Kick);
        assert_eq!(kick.range, 90.0);
        assert_eq!(kick.damage, 9);
        assert_eq!(kick.duration, 0.28);
        assert_eq!(kick.cooldown, 0.55);
    }

    #[test]
    fn start_attack_sets_timers() {
        let mut f = fighter(FighterId::Player, 100.0, Facing::Right);
        f.attack_hit = true;
        let result = start_attack(&f, AttackKind::Kick);
        assert_eq!(result.attack, Some(AttackKind::Kick));
        assert_eq!(result.attack_timer, 0.28);
        assert_eq!(result.attack_cooldown, 0.55);
        assert!(!result.attack_hit);
    }

    #[test]
    fn gate_blocks_while_busy() {
        let f = fighter(FighterId::Player, 100.0, Facing::Right);
        assert!(can_start_attack(&f));

        let swinging = start_attack(&f, AttackKind::Punch);
        assert!(!can_start_attack(&swinging));

        let mut cooling = f;
        cooling.attack_cooldown = 0.01;
        assert!(!can_start_attack(&cooling));

        let mut stunned = f;
        stunned.stunned = 0.1;
        assert!(!can_start_attack(&stunned));
    }

    #[test]
    fn punch_wins_when_both_held() {
        let f = fighter(FighterId::Player, 100.0, Facing::Right);
        let input = FightInput {
            punch: true,
            kick: true,
            ..NULL_INPUT
        };
        let result = process_attack_requests(&f, &input);
        assert_eq!(result.attack, Some(AttackKind::Punch));
        assert_eq!(result.attack_cooldown, 0.35);
    }

    #[test]
    fn attack_ends_when_timer_expires() {
        let f = punching(100.0, Facing::Right);
        let mid = tick_timers(&f, 0.1);
        assert_eq!(mid.attack, Some(AttackKind::Punch));

        let done = tick_timers(&mid, 0.2);
        assert_eq!(done.attack, None);
        assert_eq!(done.attack_timer, 0.0);
        // Cooldown keeps gating
        assert!(done.attack_cooldown > 0.0);
        assert!(!can_start_attack(&done));
    }

    #[test]
    fn timers_floor_at_zero() {
        let mut f = fighter(FighterId::Cpu, 100.0, Facing::Left);
        f.stunned = 0.01;
        let result = tick_timers(&f, 0.033);
        assert_eq!(result.stunned, 0.0);
        assert_eq!(result.attack_cooldown, 0.0);
        assert_eq!(result.attack_timer, 0.0);
    }

    #[test]
    fn hit_in_range_and_facing() {
        let attacker = punching(100.0, Facing::Right);
        let defender = fighter(FighterId::Cpu, 150.0, Facing::Left);
        let (a, d) = resolve_hit(&attacker, &defender);
        assert!(a.attack_hit);
        assert_eq!(d.health, 94);
        assert_eq!(d.stunned, HIT_STUN);
    }

    #[test]
    fn miss_out_of_range() {
        let attacker = punching(100.0, Facing::Right);
        let defender = fighter(FighterId::Cpu, 171.0, Facing::Left);
        let (a, d) = resolve_hit(&attacker, &defender);
        assert!(!a.attack_hit);
        assert_eq!(d.health, MAX_HEALTH);
    }

    #[test]
    fn miss_when_facing_away() {
        let attacker = punching(100.0, Facing::Left);
        let defender = fighter(FighterId::Cpu, 150.0, Facing::Left);
        let (_, d) = resolve_hit(&attacker, &defender);
        assert_eq!(d.health, MAX_HEALTH);
    }

    #[test]
    fn swing_lands_once() {
        let attacker = punching(100.0, Facing::Right);
        let defender = fighter(FighterId::Cpu, 150.0, Facing::Left);
        let (a, d) = resolve_hit(&attacker, &defender);
        let (_, d2) = resolve_hit(&a, &d);
        assert_eq!(d2.health, 94);
    }

    #[test]
    fn block_negates_damage_and_stun() {
        let attacker = punching(100.0, Facing::Right);
        let mut defender = fighter(FighterId::Cpu, 150.0, Facing::Left);
        defender.is_blocking = true;
        defender.stunned = 0.05;
        let (a, d) = resolve_hit(&attacker, &defender);
        assert!(a.attack_hit);
        assert_eq!(d.health, MAX_HEALTH);
        assert_eq!(d.stunned, 0.0);
    }

    #[test]
    fn health_clamps_at_zero() {
        let attacker = start_attack(
            &fighter(FighterId::Player, 100.0, Facing::Right),
            AttackKind::Kick,
        );
        let mut defender = fighter(FighterId::Cpu, 150.0, Facing::Left);
        defender.health = 4;
        let (_, d) = resolve_hit(&attacker, &defender);
        assert_eq!(d.health, 0);
    }
}
