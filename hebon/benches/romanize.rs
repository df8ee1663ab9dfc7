use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hebon::HepburnRomanizer;

pub fn criterion_benchmark(c: &mut Criterion) {
    let romanizer = HepburnRomanizer::default();

    assert_eq!(HepburnRomanizer::romanize_kana("きゃ"), Some((6, "kya")));
    c.bench_function("romanize_kana/digraph", |b| {
        b.iter(|| HepburnRomanizer::romanize_kana(black_box("きゃ")))
    });

    assert_eq!(romanizer.romanize("キーボード"), "kiiboodo");
    c.bench_function("romanize_8", |b| {
        b.iter(|| romanizer.romanize(black_box("キーボード")))
    });

    let s = "しんたいはっぷこれをふぼにうくあえてきしょうせざるはこうのはじめなり";
    assert_eq!(
        romanizer.romanize(s),
        "shintaihappukorewofuboniukuaetekishousezaruhakounohajimenari"
    );
    c.bench_function("romanize_35", |b| b.iter(|| romanizer.romanize(black_box(s))));

    let mixed = "Release notes: キーボードのファームウェアを更新しました (v1.2.3)";
    c.bench_function("romanize_mixed", |b| {
        b.iter(|| romanizer.romanize(black_box(mixed)))
    });

    let ascii = "The quick brown fox jumps over the lazy dog. 0123456789";
    assert_eq!(romanizer.romanize(ascii), ascii);
    c.bench_function("romanize_ascii", |b| {
        b.iter(|| romanizer.romanize(black_box(ascii)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
