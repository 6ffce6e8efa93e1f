//! Generation time for the serial and parallel engines

use std::time::Instant;
use canvas_life::domain::{Algorithm, GridBuffers, SeededRandom, Seed, step};

fn seeded_buffers(size: usize) -> GridBuffers {
    let mut buffers = GridBuffers::new(size, size);
    let mut rng = SeededRandom::new(2024);
    Seed::Random.apply(buffers.current_mut(), 0.3, 6, &mut rng);
    buffers
}

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut buffers = seeded_buffers(size);
    let mut rng = SeededRandom::new(7);

    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut buffers, 6, algorithm, &mut rng);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = size * size;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
