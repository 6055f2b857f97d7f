// crates/kata_core/src/rng.rs
//
// Deterministic id generation for sample data.
// Same seed → same ids on every platform: explicit ChaCha20 seeding and a
// word counter, no OS entropy anywhere.

use alloc::string::{String, ToString};

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use uuid::Builder;

use crate::ids::{OrderId, ProductId};

/// Seeded RNG that mints v4 UUID ids.
///
/// The `u64` seed maps to the ChaCha20 32-byte seed as `seed.to_le_bytes()`
/// in the first 8 bytes, the remaining 24 bytes zero.
#[derive(Debug, Clone)]
pub struct IdRng {
    rng: ChaCha20Rng,
    words_consumed: u128,
}

impl IdRng {
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(seed32),
            words_consumed: 0,
        }
    }

    /// Total number of 64-bit words drawn so far (saturating).
    #[inline]
    pub fn words_consumed(&self) -> u128 {
        self.words_consumed
    }

    /// The only place the counter advances.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }

    /// Random (v4) UUID built from 16 stream bytes, rendered lowercase
    /// hyphenated.
    pub fn next_uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        Builder::from_random_bytes(bytes).into_uuid().hyphenated().to_string()
    }

    pub fn next_product_id(&mut self) -> ProductId {
        ProductId::from_trusted(self.next_uuid())
    }

    pub fn next_order_id(&mut self) -> OrderId {
        OrderId::from_trusted(self.next_uuid())
    }
}

impl Default for IdRng {
    fn default() -> Self {
        Self::from_seed_u64(0)
    }
}
