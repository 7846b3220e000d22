use crate::constants::*;
use crate::prng::lcg_next;
use crate::types::*;

/// Scripted CPU opponent. One LCG roll per frame drives every decision, so the
/// same seed and positions always produce the same input.
/// Returns (input, next_seed).
pub fn decide_cpu(cpu: &Fighter, player: &Fighter, seed: Seed) -> (FightInput, Seed) {
    let (roll, next_seed) = lcg_next(seed);
    let distance = (cpu.x - player.x).abs();
    let mut input = NULL_INPUT;

    if distance > CPU_APPROACH_DISTANCE {
        input.left = cpu.x > player.x;
        input.right = cpu.x < player.x;
    } else if distance < CPU_RETREAT_DISTANCE && roll < CPU_RETREAT_ROLL {
        input.left = cpu.x < player.x;
        input.right = cpu.x > player.x;
    }

    if distance < CPU_ATTACK_DISTANCE && roll > CPU_ATTACK_ROLL {
        input.kick = roll > CPU_KICK_ROLL;
        input.punch = !input.kick;
    }

    if distance < CPU_BLOCK_DISTANCE && roll < CPU_BLOCK_ROLL {
        input.block = true;
    }

    if roll > CPU_JUMP_ROLL && cpu.is_grounded() {
        input.jump = true;
    }

    (input, next_seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(cpu_x: f64, player_x: f64) -> (Fighter, Fighter) {
        (
            Fighter::new(FighterId::Cpu, cpu_x, Facing::Left),
            Fighter::new(FighterId::Player, player_x, Facing::Right),
        )
    }

    /// Search forward from 0 for a seed whose next roll satisfies `pred`.
    fn seed_with_roll(pred: impl Fn(f64) -> bool) -> Seed {
        (0u32..)
            .find(|&s| pred(lcg_next(s).0))
            .expect("some seed satisfies the predicate")
    }

    #[test]
    fn advances_seed() {
        let (cpu, player) = pair(540.0, 180.0);
        let (_, seed) = decide_cpu(&cpu, &player, 1337);
        assert_eq!(seed, lcg_next(1337).1);
    }

    #[test]
    fn approaches_from_afar() {
        let (cpu, player) = pair(540.0, 180.0);
        for seed in [1u32, 2, 3, 1337] {
            let (input, _) = decide_cpu(&cpu, &player, seed);
            assert!(input.left && !input.right);
            assert!(!input.punch && !input.kick && !input.block);
        }

        let (cpu, player) = pair(100.0, 500.0);
        let (input, _) = decide_cpu(&cpu, &player, 1);
        assert!(input.right && !input.left);
    }

    #[test]
    fn retreats_when_crowded() {
        let seed = seed_with_roll(|r| r < 0.25);
        let (cpu, player) = pair(400.0, 350.0);
        let (input, _) = decide_cpu(&cpu, &player, seed);
        assert!(input.right && !input.left);
        // Low roll inside 100 also blocks
        assert!(input.block);
    }

    #[test]
    fn kicks_on_high_roll() {
        let seed = seed_with_roll(|r| r > 0.85 && r <= 0.92);
        let (cpu, player) = pair(400.0, 300.0);
        let (input, _) = decide_cpu(&cpu, &player, seed);
        assert!(input.kick && !input.punch);
        assert!(!input.jump);
    }

    #[test]
    fn punches_on_mid_roll() {
        let seed = seed_with_roll(|r| r > 0.65 && r <= 0.85);
        let (cpu, player) = pair(400.0, 300.0);
        let (input, _) = decide_cpu(&cpu, &player, seed);
        assert!(input.punch && !input.kick);
    }

    #[test]
    fn jumps_only_when_grounded() {
        let seed = seed_with_roll(|r| r > 0.92);
        let (mut cpu, player) = pair(540.0, 180.0);
        let (input, _) = decide_cpu(&cpu, &player, seed);
        assert!(input.jump);

        cpu.y = 12.0;
        let (input, _) = decide_cpu(&cpu, &player, seed);
        assert!(!input.jump);
    }

    #[test]
    fn idle_in_midrange_on_low_roll_past_block_distance() {
        let seed = seed_with_roll(|r| r < 0.25);
        let (cpu, player) = pair(410.0, 300.0);
        let (input, _) = decide_cpu(&cpu, &player, seed);
        assert_eq!(input, NULL_INPUT);
    }
}
