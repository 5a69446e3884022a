//! Benchmarks for face index operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use facets::prelude::*;

/// Corner list of an n x n grid of quads, split into triangles.
fn grid_coord_index(n: usize) -> Vec<i32> {
    let mut coord_index = Vec::with_capacity(n * n * 8);

    for j in 0..n {
        for i in 0..n {
            let v00 = (j * (n + 1) + i) as i32;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1) as i32;
            let v11 = v01 + 1;

            coord_index.extend_from_slice(&[v00, v10, v11, -1]);
            coord_index.extend_from_slice(&[v00, v11, v01, -1]);
        }
    }

    coord_index
}

fn bench_construction(c: &mut Criterion) {
    let n = 100;
    let coord_index = grid_coord_index(n);
    let num_vertices = (n + 1) * (n + 1);

    c.bench_function("build_grid_100x100", |b| {
        b.iter(|| Faces::new(num_vertices, black_box(&coord_index)).unwrap())
    });
}

fn bench_corner_face(c: &mut Criterion) {
    let faces = Faces::from_coord_index(&grid_coord_index(100)).unwrap();

    c.bench_function("corner_face_all_corners", |b| {
        b.iter(|| {
            (0..faces.num_corners())
                .filter_map(|c| faces.corner_face(CornerId::new(c)))
                .count()
        })
    });
}

fn bench_face_walk(c: &mut Criterion) {
    let faces = Faces::from_coord_index(&grid_coord_index(100)).unwrap();

    c.bench_function("next_corner_walk_all_faces", |b| {
        b.iter(|| {
            let mut steps = 0;
            for f in faces.face_ids() {
                let Some(start) = faces.face_first_corner(f) else {
                    continue;
                };
                let mut corner = start;
                loop {
                    corner = faces.next_corner(corner).unwrap();
                    steps += 1;
                    if corner == start {
                        break;
                    }
                }
            }
            steps
        })
    });
}

criterion_group!(benches, bench_construction, bench_corner_face, bench_face_walk);
criterion_main!(benches);
