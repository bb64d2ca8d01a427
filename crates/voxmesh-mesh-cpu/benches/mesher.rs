use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};

use voxmesh_blocks::UvAtlas;
use voxmesh_grid::{TerrainConfig, TerrainMode, VoxelGrid, generate};
use voxmesh_mesh_cpu::{MeshBuffer, count_exposed_faces, count_exposed_faces_par, mesh_chunk, mesh_into};

fn layered(n: usize) -> VoxelGrid {
    let mut g = VoxelGrid::new(n, n, n).unwrap();
    generate(&mut g, &TerrainConfig::default(), 0xC0FFEE);
    g
}

fn noise(n: usize) -> VoxelGrid {
    let mut g = VoxelGrid::new(n, n, n).unwrap();
    let cfg = TerrainConfig {
        mode: TerrainMode::Noise,
        ..TerrainConfig::default()
    };
    generate(&mut g, &cfg, 1337);
    g
}

fn bench_mesh_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_chunk");
    let atlas = UvAtlas::default();
    for (name, grid) in [
        ("layered_16", layered(16)),
        ("noise_16", noise(16)),
        ("layered_64", layered(64)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(mesh_chunk(black_box(&grid), &atlas).unwrap()))
        });
    }
    group.finish();
}

fn bench_reused_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_into_reused");
    let atlas = UvAtlas::default();
    let grid = layered(64);
    let mut buf = MeshBuffer::default();
    group.bench_function("layered_64", |b| {
        b.iter(|| {
            buf.reset(count_exposed_faces(&grid));
            black_box(mesh_into(&grid, &atlas, &mut buf).unwrap());
        })
    });
    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_exposed_faces");
    let grid = noise(64);
    group.bench_function("seq_64", |b| b.iter(|| black_box(count_exposed_faces(&grid))));
    group.bench_function("par_64", |b| {
        b.iter(|| black_box(count_exposed_faces_par(&grid)))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_mesh_chunk, bench_reused_buffer, bench_count
}
criterion_main!(benches);
