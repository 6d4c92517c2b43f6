const FALLBACK_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of uniform draws in `[0, 1)` for heading selection and particle
/// spawning. Injected so both are replayable under test.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// SplitMix64 stream seeded once from OS entropy. Per-call draws never fail;
/// if entropy is unavailable the stream falls back to a constant seed.
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn from_entropy() -> Self {
        Self::seeded(getrandom::u64().unwrap_or(FALLBACK_SEED))
    }

    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits keep the value exactly representable below 1.0.
        (self.next_u64() >> 40) as f32 * (1.0 / (1u64 << 24) as f32)
    }
}

#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
