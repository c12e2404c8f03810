use crate::bits::BitArray;
use crate::error::{Error, Result};
use crate::hash::{compute_k_num, HashStrategy};

/// A space-efficient probabilistic set. Queries answer "possibly in the
/// set" or "definitely not in the set"; items can be added but never
/// removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    bits: BitArray,         // filter data
    strategy: HashStrategy, // index derivation scheme
    k: usize,               // bit positions per item
    items_count: usize,     // expected number of items, n
    inserted: usize,        // adds performed so far
}

impl Filter {
    /// Create a new bloom filter structure.
    /// fp_rate is the wanted rate of false positives, in ]0.0, 1.0[
    /// items_count is an estimation of the maximum number of items to store.
    pub fn new(fp_rate: f64, items_count: usize, strategy: HashStrategy) -> Result<Self> {
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(Error::FalsePositiveRateOutOfRange(fp_rate));
        }
        if items_count == 0 {
            return Err(Error::ZeroItemsCount);
        }
        let bits = BitArray::with_fp_rate(items_count, fp_rate);
        let k = compute_k_num(bits.len(), items_count);
        Ok(Self {
            bits,
            strategy,
            k,
            items_count,
            inserted: 0,
        })
    }

    /// Rebuilds a filter from a raw bit dump produced by `raw_data`.
    /// m, k, items_count and the strategy must match the dumped filter for
    /// membership answers to carry over. The counter of performed adds
    /// starts fresh.
    pub fn with_raw_data(
        raw_data: &[u8],
        m: usize,
        k: usize,
        items_count: usize,
        strategy: HashStrategy,
    ) -> Self {
        Self {
            bits: BitArray::with_raw_data(m, raw_data),
            strategy,
            k,
            items_count,
            inserted: 0,
        }
    }

    pub fn add(&mut self, item: &[u8]) {
        self.strategy
            .index_iter(item, self.k, self.bits.len())
            .for_each(|i| self.bits.set(i));
        self.inserted += 1;
    }

    pub fn add_all<'a, I: IntoIterator<Item = &'a [u8]>>(&mut self, items: I) {
        items.into_iter().for_each(|item| self.add(item))
    }

    pub fn might_contain(&self, item: &[u8]) -> bool {
        self.strategy
            .index_iter(item, self.k, self.bits.len())
            .all(|i| self.bits.get(i))
    }

    pub fn might_contain_all<'a, I: IntoIterator<Item = &'a [u8]>>(&self, items: I) -> bool {
        items.into_iter().all(|item| self.might_contain(item))
    }

    /// Size of the bit array, m.
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of bit positions set per item, k.
    pub fn num_hashes(&self) -> usize {
        self.k
    }

    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// Number of adds performed, counting repeated adds of the same item.
    pub fn element_count(&self) -> usize {
        self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Bits of storage per added item, or None while the filter is empty.
    pub fn bits_per_element(&self) -> Option<f64> {
        if self.inserted == 0 {
            None
        } else {
            Some(self.bits.len() as f64 / self.inserted as f64)
        }
    }

    /// False positive probability once the expected number of items has
    /// been added.
    pub fn expected_fp_rate(&self) -> f64 {
        self.fp_rate_for(self.items_count)
    }

    /// False positive probability at the current number of adds.
    pub fn current_fp_rate(&self) -> f64 {
        self.fp_rate_for(self.inserted)
    }

    // (1 - e^(-k * count / m))^k
    fn fp_rate_for(&self, count: usize) -> f64 {
        let k = self.k as f64;
        let m = self.bits.len() as f64;
        (1.0 - (-k * (count as f64) / m).exp()).powf(k)
    }

    pub fn raw_data(&self) -> Vec<u8> {
        self.bits.raw_data()
    }
}
