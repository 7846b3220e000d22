use sha2::{Digest, Sha256};

use crate::types::{AttackKind, Facing, FightInput, FightState, Fighter, FighterId, Status};

/// Pack one input frame into a 6-bit mask: left, right, jump, punch, kick, block.
pub fn input_bits(input: &FightInput) -> u8 {
    (input.left as u8)
        | (input.right as u8) << 1
        | (input.jump as u8) << 2
        | (input.punch as u8) << 3
        | (input.kick as u8) << 4
        | (input.block as u8) << 5
}

/// SHA-256 hash of the player input transcript, one byte per frame.
pub fn hash_transcript(inputs: &[FightInput]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update([input_bits(input)]);
    }
    hasher.finalize().into()
}

fn encode_fighter(buf: &mut Vec<u8>, f: &Fighter) {
    buf.push(match f.id {
        FighterId::Player => 0,
        FighterId::Cpu => 1,
    });
    for v in [f.x, f.y, f.vx, f.vy] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    buf.push(match f.facing {
        Facing::Left => 0,
        Facing::Right => 1,
    });
    buf.extend_from_slice(&f.health.to_le_bytes());
    buf.push(f.is_blocking as u8);
    buf.push(match f.attack {
        None => 0,
        Some(AttackKind::Punch) => 1,
        Some(AttackKind::Kick) => 2,
    });
    for v in [f.attack_timer, f.attack_cooldown] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    buf.push(f.attack_hit as u8);
    buf.extend_from_slice(&f.stunned.to_le_bytes());
}

/// Fixed little-endian layout of every state field, for fingerprinting.
/// Floats are encoded bit-exactly, so equal bytes mean an identical state.
pub fn encode_state(s: &FightState) -> Vec<u8> {
    let mut buf = Vec::with_capacity(160);
    for v in [s.arena.width, s.arena.height, s.arena.ground] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    buf.extend_from_slice(&s.seed.to_le_bytes());
    buf.extend_from_slice(&s.time.to_le_bytes());
    buf.push(match s.status {
        Status::Ready => 0,
        Status::Running => 1,
        Status::GameOver => 2,
    });
    buf.push(match s.winner {
        None => 0,
        Some(FighterId::Player) => 1,
        Some(FighterId::Cpu) => 2,
    });
    encode_fighter(&mut buf, &s.player);
    encode_fighter(&mut buf, &s.cpu);
    buf
}

/// SHA-256 of the encoded state.
pub fn hash_state(s: &FightState) -> [u8; 32] {
    Sha256::digest(encode_state(s)).into()
}
