use rand::{Error, RngCore, SeedableRng};

/// Modulus of the generator, the Mersenne prime `2^31 - 1`.
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier of the "minimal standard" generator.
pub const MULTIPLIER: u64 = 16_807;

/// Park–Miller "minimal standard" linear-congruential generator.
///
/// Each step computes `state = state * 16807 mod (2^31 - 1)`. Seeding applies
/// one step to the raw seed, so the first draw of `MinStd::new(1)` is the
/// second element of the classic sequence.
///
/// # Examples
///
/// ```
/// use goodish_util::math::MinStd;
///
/// let mut a = MinStd::new(7);
/// let mut b = MinStd::new(7);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinStd {
    state: u64,
}

impl MinStd {
    /// Create a generator from a seed.
    ///
    /// Seeds congruent to zero modulo `2^31 - 1` would lock the generator at
    /// zero, so they start from the same state as seed `1`.
    pub fn new(seed: u64) -> Self {
        let mut state = (seed % MODULUS) * MULTIPLIER % MODULUS;
        if state == 0 {
            state = MULTIPLIER;
        }
        Self { state }
    }

    /// Current internal state, always in `[1, 2^31 - 2]`.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn step(&mut self) -> u64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state
    }

    /// Advance the generator and map the new state onto `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.step() - 1) as f64 / (MODULUS - 1) as f64
    }
}

impl RngCore for MinStd {
    fn next_u32(&mut self) -> u32 {
        // The state carries 31 bits; take the upper 16 of two steps.
        let hi = (self.step() >> 15) as u32;
        let lo = (self.step() >> 15) as u32;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinStd {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
