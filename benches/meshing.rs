/// Benchmark suite for terrain generation and face-culled chunk meshing
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxelcraft::renderer::mesh_utils::generate_chunk_mesh;
use voxelcraft::world::storage::chunk_operations::create_generated_chunk;
use voxelcraft::world::world_operations::{generate_chunks_parallel, generate_initial_chunks};
use voxelcraft::{ChunkPos, EngineConfig, TerrainGenerator, TerrainParams, WorldData};

fn bench_generate_chunk(c: &mut Criterion) {
    c.bench_function("generate_chunk", |b| {
        let generator = TerrainGenerator::new(TerrainParams::default());
        b.iter(|| create_generated_chunk(black_box(ChunkPos::new(3, -2)), &generator));
    });
}

fn bench_generate_chunk_with_detail(c: &mut Criterion) {
    c.bench_function("generate_chunk_with_detail", |b| {
        let generator = TerrainGenerator::new(TerrainParams {
            seed: 7,
            detail_amplitude: 2.0,
            ..TerrainParams::default()
        });
        b.iter(|| create_generated_chunk(black_box(ChunkPos::new(3, -2)), &generator));
    });
}

fn bench_generate_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_ring_parallel");

    for radius in [1, 3, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(radius), radius, |b, &radius| {
            let generator = TerrainGenerator::new(TerrainParams::default());
            let positions: Vec<ChunkPos> = (-radius..=radius)
                .flat_map(|x| (-radius..=radius).map(move |z| ChunkPos::new(x, z)))
                .collect();
            b.iter(|| generate_chunks_parallel(&generator, black_box(&positions)));
        });
    }
    group.finish();
}

fn bench_mesh_terrain_chunk(c: &mut Criterion) {
    c.bench_function("mesh_terrain_chunk", |b| {
        let config = EngineConfig {
            render_distance: 1,
            ..EngineConfig::default()
        };
        let mut world = WorldData::new(&config);
        generate_initial_chunks(&mut world);
        b.iter(|| generate_chunk_mesh(&world, black_box(ChunkPos::new(0, 0))));
    });
}

fn bench_mesh_flat_chunk(c: &mut Criterion) {
    c.bench_function("mesh_flat_chunk", |b| {
        let config = EngineConfig {
            render_distance: 1,
            terrain: TerrainParams::flat(40.0),
            ..EngineConfig::default()
        };
        let mut world = WorldData::new(&config);
        generate_initial_chunks(&mut world);
        b.iter(|| generate_chunk_mesh(&world, black_box(ChunkPos::new(0, 0))));
    });
}

criterion_group!(
    benches,
    bench_generate_chunk,
    bench_generate_chunk_with_detail,
    bench_generate_ring,
    bench_mesh_terrain_chunk,
    bench_mesh_flat_chunk,
);
criterion_main!(benches);
