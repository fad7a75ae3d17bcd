use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kennel::{seed, Catalog, MemoryStore, NoopLocator, PuppyPatch, VisitorLog};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

fn seeded_catalog(rt: &Runtime, listings: usize) -> Catalog {
  let catalog = Catalog::new(Arc::new(MemoryStore::new()));
  rt.block_on(async {
    for _ in 0..listings {
      for puppy in seed::default_puppies() {
        catalog.create_puppy(puppy).await.expect("seed listing is valid");
      }
    }
  });
  catalog
}

fn bench_list_puppies(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("catalog_list");
  for batches in [1usize, 10, 100] {
    let catalog = seeded_catalog(&rt, batches);
    group.throughput(Throughput::Elements((batches * 3) as u64));
    group.bench_with_input(BenchmarkId::from_parameter(batches * 3), &catalog, |b, catalog| {
      b.to_async(&rt).iter(|| async { catalog.list_puppies().await.unwrap() });
    });
  }
  group.finish();
}

fn bench_create_and_update(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let catalog = seeded_catalog(&rt, 10);
  c.bench_function("catalog_create_update_delete", |b| {
    b.to_async(&rt).iter(|| async {
      let listing = seed::default_puppies().remove(1);
      let puppy = catalog.create_puppy(listing).await.unwrap();
      let patch = PuppyPatch {
        price: Some(4000),
        ..Default::default()
      };
      catalog.update_puppy(puppy.id, patch).await.unwrap();
      catalog.delete_puppy(puppy.id).await.unwrap();
    });
  });
}

fn bench_log_visit(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let log = VisitorLog::new(Arc::new(MemoryStore::new()), Arc::new(NoopLocator));
  c.bench_function("visitor_log_visit", |b| {
    b.to_async(&rt).iter(|| async { log.log_visit("8.8.8.8", None, "/api/puppies").await });
  });
}

criterion_group!(benches, bench_list_puppies, bench_create_and_update, bench_log_visit);
criterion_main!(benches);
