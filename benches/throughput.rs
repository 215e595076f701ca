use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lzbase62::{compress, decompress};

fn generate_text(size_kb: usize) -> String {
    let base = "The quick brown fox jumps over the lazy dog. 素早い茶色の狐がのろまな犬を飛び越える。 Repetition inside a 304-unit window is what the match finder can use. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text
}

fn bench_compress(c: &mut Criterion) {
    for size_kb in [1, 10, 100] {
        let text = generate_text(size_kb);
        c.bench_function(&format!("compress_{size_kb}kb"), |b| {
            b.iter(|| black_box(compress(black_box(&text))))
        });
    }
}

fn bench_decompress(c: &mut Criterion) {
    for size_kb in [1, 10, 100] {
        let packed = compress(&generate_text(size_kb));
        c.bench_function(&format!("decompress_{size_kb}kb"), |b| {
            b.iter(|| black_box(decompress(black_box(&packed))))
        });
    }
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
