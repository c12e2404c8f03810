use std::f64::consts::LN_2;
use xxhash_rust::xxh3::xxh3_64_with_seed;

// Fixed salts, one per base hash value. Derivation must stay stable
// across processes, so the salts are compile-time constants.
const H1_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
const H2_SEED: u64 = 0xff51_afd7_ed55_8ccd;
const H3_SEED: u64 = 0xc4ce_b9fe_1a85_ec53;

// Substituted when the salted hash yields 0 for h2. A zero step would
// collapse every probe into h1's bucket.
const H2_FALLBACK: u64 = 0xcbf2_9ce4_8422_2325;

// Calculates the number of hash functions, k, for a bit array of m bits
// holding items_count items: round((m / n) * ln 2), at least 1.
pub(crate) fn compute_k_num(m: usize, items_count: usize) -> usize {
    let k = ((m as f64 / items_count as f64) * LN_2).round() as usize;
    k.max(1)
}

/// Scheme for expanding two or three base hash values into k bit positions.
///
/// All variants compute, for i in 0..k, a position in [0, m):
///
/// - `Double`: h1 + i*h2. Cheapest; the probe sequence can fall into a
///   short cycle when h2 and m share a large factor.
/// - `Triple`: h1 + i*h2 + i²*h3. A quadratic term fed by a third base
///   hash, trading one extra hash computation for less positional
///   correlation.
/// - `EnhancedDouble`: h1 + i*h2 + (i³ - i)/6. Breaks short cycles like
///   `Triple` but needs no third hash; the correction term is a product of
///   three consecutive integers divided by 6, so it is always an integer
///   (Dillinger & Manolios).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashStrategy {
    Double,
    Triple,
    EnhancedDouble,
}

impl HashStrategy {
    fn uses_third_hash(self) -> bool {
        self == HashStrategy::Triple
    }

    fn position(self, hashes: &BaseHashes, i: u64, m: u64) -> u64 {
        let combined = match self {
            HashStrategy::Double => hashes.h1.wrapping_add(i.wrapping_mul(hashes.h2)),
            HashStrategy::Triple => {
                let h3 = hashes.h3.expect("triple hashing derives a third base hash");
                hashes
                    .h1
                    .wrapping_add(i.wrapping_mul(hashes.h2))
                    .wrapping_add(i.wrapping_mul(i).wrapping_mul(h3))
            }
            HashStrategy::EnhancedDouble => {
                let correction = i.wrapping_mul(i).wrapping_mul(i).wrapping_sub(i) / 6;
                hashes
                    .h1
                    .wrapping_add(i.wrapping_mul(hashes.h2))
                    .wrapping_add(correction)
            }
        };
        combined % m
    }

    /// Creates an iterator over the k bit positions of `data` in a filter
    /// of m bits.
    pub fn index_iter(self, data: &[u8], k: usize, m: usize) -> IndexIter {
        IndexIter {
            hashes: BaseHashes::derive(data, self),
            strategy: self,
            k,
            m,
            counter: 0,
        }
    }
}

/// Base hash values derived from an item's bytes. h3 is present only for
/// the strategy that consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseHashes {
    pub h1: u64,
    pub h2: u64,
    pub h3: Option<u64>,
}

impl BaseHashes {
    pub fn derive(data: &[u8], strategy: HashStrategy) -> Self {
        let h1 = xxh3_64_with_seed(data, H1_SEED);
        let mut h2 = xxh3_64_with_seed(data, H2_SEED);
        if h2 == 0 {
            h2 = H2_FALLBACK;
        }
        let h3 = if strategy.uses_third_hash() {
            Some(xxh3_64_with_seed(data, H3_SEED))
        } else {
            None
        };
        Self { h1, h2, h3 }
    }
}

pub struct IndexIter {
    hashes: BaseHashes,
    strategy: HashStrategy,
    k: usize, // number of positions to yield
    m: usize, // filter size
    counter: usize,
}

impl Iterator for IndexIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.counter == self.k {
            return None;
        }
        let r = self.strategy.position(&self.hashes, self.counter as u64, self.m as u64);
        self.counter += 1;
        Some(r as usize)
    }
}
