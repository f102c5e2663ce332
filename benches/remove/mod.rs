use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use ordavl::AvlTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("n_values", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to remove all `n_values` randomly generated values
/// from a populated tree, in insertion order.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let t = (0..n_values).map(|_| rand.next()).collect::<AvlTree<_>>();

    let bench_name = BenchName { n_values };
    g.throughput(Throughput::Elements(n_values as _)); // Values removed per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (t.clone(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    let v = rand.next();
                    assert_eq!(t.remove(&v), Some(v));
                }
                t
            },
            BatchSize::LargeInput,
        );
    });
}
