use tracing::info;

use crate::ai::decide_cpu;
use crate::combat::{process_attack_requests, resolve_hit, tick_timers};
use crate::physics::*;
use crate::types::*;

/// Core deterministic transition function, called once per rendered frame.
///
/// Sub-step order:
///  0. Early return if GameOver
///  1. Advance clock, roll CPU input from the previous frame's positions
///  2. Apply movement input (both fighters)
///  3. Attack starts: punch then kick, player then CPU
///  4. Tick attack / cooldown / stun timers
///  5. Integrate physics
///  6. Facing (player first, CPU faces the updated player)
///  7. Minimum separation
///  8. Hits: player→CPU, then CPU→player on the mutated fighters
///  9. KO check
pub fn step_fight(prev: &FightState, input: &FightInput, dt: f64) -> FightState {
    // 0. Frozen once the match is decided
    if prev.status == Status::GameOver {
        return prev.clone();
    }

    // 1. Clock + CPU decision
    let time = prev.time + dt;
    let (cpu_input, seed) = decide_cpu(&prev.cpu, &prev.player, prev.seed);

    // 2. Movement
    let mut player = apply_movement(&prev.player, input);
    let mut cpu = apply_movement(&prev.cpu, &cpu_input);

    // 3. Attack starts
    player = process_attack_requests(&player, input);
    cpu = process_attack_requests(&cpu, &cpu_input);

    // 4. Timers
    player = tick_timers(&player, dt);
    cpu = tick_timers(&cpu, dt);

    // 5. Physics
    player = integrate(&player, dt, &prev.arena);
    cpu = integrate(&cpu, dt, &prev.arena);

    // 6. Facing
    player = update_facing(&player, &cpu);
    cpu = update_facing(&cpu, &player);

    // 7. Separation
    (player, cpu) = enforce_separation(&player, &cpu);

    // 8. Hits, order matters on simultaneous swings
    (player, cpu) = resolve_hit(&player, &cpu);
    (cpu, player) = resolve_hit(&cpu, &player);

    // 9. KO; a double KO goes to the CPU
    let mut status = prev.status;
    let mut winner = prev.winner;
    if player.health <= 0 || cpu.health <= 0 {
        status = Status::GameOver;
        winner = Some(if player.health > cpu.health {
            FighterId::Player
        } else {
            FighterId::Cpu
        });
        info!(
            ?winner,
            player_health = player.health,
            cpu_health = cpu.health,
            time,
            "fight over"
        );
    }

    FightState {
        arena: prev.arena,
        seed,
        time,
        status,
        winner,
        player,
        cpu,
    }
}
