//! Normalizer and code generation benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use shortener::utils::generate_random_code;
use shortener::utils::sanitizer::sanitize;
use shortener::utils::url_validator::validate_url;

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizer/sanitize");

    group.bench_function("bare_host", |b| {
        b.iter(|| sanitize(std::hint::black_box("google.com")));
    });

    group.bench_function("full_url", |b| {
        b.iter(|| {
            sanitize(std::hint::black_box(
                "  HTTPS://WWW.GitHub.com/DatabaseCleaner/database_cleaner/  ",
            ))
        });
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizer/validate_url");

    group.bench_function("valid_with_scheme", |b| {
        b.iter(|| {
            assert!(validate_url("https://en.wikipedia.org/wiki/HTML_element#Anchor").is_ok());
        });
    });

    group.bench_function("valid_bare", |b| {
        b.iter(|| {
            assert!(validate_url("my-google.com").is_ok());
        });
    });

    group.bench_function("invalid", |b| {
        b.iter(|| {
            assert!(validate_url("abc").is_err());
        });
    });

    group.finish();
}

fn bench_generate_random_code(c: &mut Criterion) {
    c.bench_function("utils/generate_random_code/6", |b| {
        b.iter(|| generate_random_code(std::hint::black_box(6)));
    });
}

criterion_group!(benches, bench_sanitize, bench_validate, bench_generate_random_code);
criterion_main!(benches);
