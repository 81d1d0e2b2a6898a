use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrweave::encoder::galois::Gf256;
use qrweave::encoder::mask::Masker;
use qrweave::encoder::modes::Mode;
use qrweave::encoder::qr_encoder::QrEncoder;
use qrweave::encoder::reed_solomon::ReedSolomonEncoder;
use qrweave::{ECLevel, Version, encode, encode_batch};

const URL: &str = "https://github.com/search?q=qr+code+encoder&type=repositories";

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_hello_world_m", |b| {
        b.iter(|| encode(black_box("HELLO WORLD"), black_box(ECLevel::M)))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    c.bench_function("encode_url_q", |b| {
        b.iter(|| encode(black_box(URL), black_box(ECLevel::Q)))
    });
}

fn bench_encode_large(c: &mut Criterion) {
    let payload = "0123456789".repeat(700);
    c.bench_function("encode_7000_digits_l", |b| {
        b.iter(|| encode(black_box(&payload), black_box(ECLevel::L)))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let payloads: Vec<String> = (0..64).map(|i| format!("{}?id={}", URL, i)).collect();
    let refs: Vec<&str> = payloads.iter().map(String::as_str).collect();
    c.bench_function("encode_batch_64_urls", |b| {
        b.iter(|| encode_batch(black_box(&refs), black_box(ECLevel::M)))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let rs = ReedSolomonEncoder::new(30);
    let data: Vec<u8> = (0..=117u8).collect();
    c.bench_function("reed_solomon_118_plus_30", |b| {
        b.iter(|| rs.encode(black_box(&data)))
    });
    c.bench_function("generator_poly_30", |b| {
        b.iter(|| Gf256::generator_poly(black_box(30)))
    });
}

fn bench_mask_selection(c: &mut Criterion) {
    let version = Version::new(10).unwrap();
    let bits = QrEncoder::codeword_bits(URL.as_bytes(), Mode::Byte, version, ECLevel::M).unwrap();
    let mut encoder = QrEncoder::new(version, ECLevel::M, Mode::Byte);
    encoder.draw_layout().unwrap();
    encoder.place_payload(&bits).unwrap();
    let mut matrix = encoder.matrix().clone();
    c.bench_function("best_mask_v10", |b| {
        b.iter(|| Masker::best_mask(black_box(&mut matrix)))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_url,
    bench_encode_large,
    bench_encode_batch,
    bench_reed_solomon,
    bench_mask_selection
);
criterion_main!(benches);
