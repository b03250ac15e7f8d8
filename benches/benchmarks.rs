use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use interesting_words::{sort, DocumentReader, SortPolicy};

const WORDS: &[&str] = &[
    "liberty", "union", "nation", "people", "freedom", "justice", "history", "promise",
    "journey", "country", "future", "children", "courage", "labor", "harvest", "river",
];

fn random_document(rng: &mut StdRng, sentences: usize) -> String {
    let mut text = String::new();
    for _ in 0..sentences {
        let len = rng.gen_range(5..15);
        let sentence: Vec<&str> = (0..len).map(|_| WORDS[rng.gen_range(0..WORDS.len())]).collect();
        text.push_str(&sentence.join(" "));
        text.push_str(". ");
    }
    text
}

fn corpus(docs: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..docs).map(|_| random_document(&mut rng, 200)).collect()
}

fn bench_ingest(c: &mut Criterion) {
    let docs = corpus(10);
    c.bench_function("ingest_10_docs", |b| {
        b.iter(|| {
            let mut reader = DocumentReader::default();
            for (i, doc) in docs.iter().enumerate() {
                reader.ingest(&format!("doc{}.txt", i), doc);
            }
            black_box(reader.index().len())
        })
    });
}

fn bench_score_and_sort(c: &mut Criterion) {
    let docs = corpus(10);
    c.bench_function("score_and_sort_iaf", |b| {
        b.iter(|| {
            let mut reader = DocumentReader::default();
            for (i, doc) in docs.iter().enumerate() {
                reader.ingest(&format!("doc{}.txt", i), doc);
            }
            reader.compute_importance().unwrap();
            let mut index = reader.into_index();
            sort(&mut index, SortPolicy::ImportanceAndFrequency);
            black_box(index.len())
        })
    });
}

criterion_group!(benches, bench_ingest, bench_score_and_sort);
criterion_main!(benches);
