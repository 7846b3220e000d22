/// Linear-congruential generator driving the CPU opponent.
/// Pure function: returns (roll_in_0_1, next_state).
///
///   next = (state * 1664525 + 1013904223) mod 2^32
///   roll = next / 0xffffffff
///
/// The divisor is 2^32 - 1, so a state of `u32::MAX` yields exactly 1.0.
pub fn lcg_next(state: u32) -> (f64, u32) {
    let next_state = state.wrapping_mul(1664525).wrapping_add(1013904223);
    let roll = next_state as f64 / u32::MAX as f64;
    (roll, next_state)
}

/// Stateful wrapper for callers that want an `FnMut() -> f64` source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcgRng {
    pub state: u32,
}

impl LcgRng {
    pub fn new(seed: u32) -> Self {
        LcgRng { state: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        let (roll, next) = lcg_next(self.state);
        self.state = next;
        roll
    }
}
