use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use ordavl::{AvlTree, Order};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("traverse");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::default();

    for _i in 0..n_values {
        t.insert(rand.next());
    }

    bench_in_order(n_values, g, &t);
    bench_pre_order(n_values, g, &t);
    bench_post_order(n_values, g, &t);
    bench_level_order(n_values, g, &t);
}

macro_rules! traverse_bench {
    (
        $name:ident,
        $order:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &AvlTree<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        t.traverse($order, |v| {
                            black_box(v);
                        });
                    })
                });
            }
        }
    };
}

traverse_bench!(in_order, Order::InOrder);
traverse_bench!(pre_order, Order::PreOrder);
traverse_bench!(post_order, Order::PostOrder);
traverse_bench!(level_order, Order::LevelOrder);
