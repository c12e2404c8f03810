extern crate bloom_hashing;
extern crate rand;
#[macro_use]
extern crate criterion;

use bloom_hashing::{BloomFilter, HashStrategy};
use criterion::{Criterion, Fun};
use rand::distributions::Standard;
use rand::{thread_rng, Rng};

fn strategy_fun(name: &'static str, strategy: HashStrategy) -> Fun<f64> {
    Fun::new(name, move |b, fp_rate: &f64| {
        let mut filter = BloomFilter::new(*fp_rate, 100, strategy).unwrap();
        let items: Vec<u64> = thread_rng().sample_iter(&Standard).take(7).collect();
        items.iter().for_each(|i| filter.add(&i.to_le_bytes()));
        let items: Vec<u64> = thread_rng().sample_iter(&Standard).take(7).collect();
        b.iter(|| {
            items.iter().for_each(|i| {
                filter.might_contain(&i.to_le_bytes());
            })
        })
    })
}

fn bench(c: &mut Criterion) {
    let functions = vec![
        strategy_fun("double", HashStrategy::Double),
        strategy_fun("triple", HashStrategy::Triple),
        strategy_fun("enhanced_double", HashStrategy::EnhancedDouble),
    ];
    c.bench_functions("contains", functions, 0.03);
}

criterion_group!(benches, bench);
criterion_main!(benches);
