use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hebon_unicode::kana::{find_kana_lead_byte, CharKanaExt, StrKanaExt};

pub fn criterion_benchmark(c: &mut Criterion) {
    assert_eq!('カ'.to_hiragana(), 'か');
    c.bench_function("to_hiragana/hit", |b| b.iter(|| black_box('カ').to_hiragana()));

    assert_eq!('a'.to_hiragana(), 'a');
    c.bench_function("to_hiragana/miss", |b| b.iter(|| black_box('a').to_hiragana()));

    c.bench_function("str_to_hiragana", |b| {
        b.iter(|| black_box("クァルテットのキーボード").to_hiragana())
    });

    assert!(find_kana_lead_byte("12345678901234567890か".as_bytes()).is_some());
    c.bench_function("find_kana_lead_byte", |b| {
        b.iter(|| find_kana_lead_byte(black_box("12345678901234567890か".as_bytes())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
