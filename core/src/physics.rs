use crate::constants::*;
use crate::types::*;

/// Map held input onto velocity and blocking. A stunned fighter ignores input
/// and only bleeds off horizontal speed.
pub fn apply_movement(f: &Fighter, input: &FightInput) -> Fighter {
    if f.is_stunned() {
        return Fighter {
            vx: f.vx * STUN_VX_DECAY,
            ..*f
        };
    }

    let mut vy = f.vy;
    if input.jump && f.is_grounded() {
        vy = JUMP_SPEED;
    }

    Fighter {
        vx: input.horizontal() * MOVE_SPEED,
        vy,
        is_blocking: input.block,
        ..*f
    }
}

/// Integrate position, apply gravity, land on the ground and clamp to the walls.
pub fn integrate(f: &Fighter, dt: f64, arena: &Arena) -> Fighter {
    let mut x = f.x + f.vx * dt;
    let mut y = f.y + f.vy * dt;
    let mut vy = f.vy - GRAVITY * dt;

    // Ground is fully inelastic
    if y < 0.0 {
        y = 0.0;
        vy = 0.0;
    }

    let min_x = WALL_MARGIN;
    let max_x = arena.width - WALL_MARGIN;
    if x < min_x {
        x = min_x;
    }
    if x > max_x {
        x = max_x;
    }

    Fighter { x, y, vy, ..*f }
}

/// Turn to face the opponent. Equal x resolves to Right.
pub fn update_facing(f: &Fighter, opponent: &Fighter) -> Fighter {
    let facing = if opponent.x >= f.x {
        Facing::Right
    } else {
        Facing::Left
    };
    Fighter { facing, ..*f }
}

/// Push the pair apart symmetrically until they are at least `MIN_GAP` apart.
/// Walls are not re-applied afterwards.
pub fn enforce_separation(a: &Fighter, b: &Fighter) -> (Fighter, Fighter) {
    let dist = b.x - a.x;
    if dist.abs() >= MIN_GAP {
        return (*a, *b);
    }
    let push = (MIN_GAP - dist.abs()) / 2.0;
    // Exact overlap counts as b being to the right
    let dir = if dist >= 0.0 { 1.0 } else { -1.0 };
    (
        Fighter {
            x: a.x - push * dir,
            ..*a
        },
        Fighter {
            x: b.x + push * dir,
            ..*b
        },
    )
}
