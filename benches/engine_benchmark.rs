use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ferrodex::analysis::content::Content;
use ferrodex::engine::{Engine, SearchRequest};
use ferrodex::query::ast::Query;
use rand::Rng;
use std::collections::HashMap;

fn build_engine(doc_count: usize) -> Engine {
    let mut engine = Engine::new();
    engine
        .new_index(
            "bench",
            [(
                "body".to_string(),
                HashMap::from([("type".to_string(), "text".to_string())]),
            )],
        )
        .unwrap();

    let vocabulary = [
        "rust", "programming", "search", "engine", "database", "index", "query", "document",
        "inverted", "posting", "phrase", "term", "field", "schema",
    ];
    let mut rng = rand::thread_rng();
    for i in 0..doc_count {
        let body: String = (0..20)
            .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
            .collect::<Vec<_>>()
            .join(" ");
        engine
            .index(
                "bench",
                format!("doc://{i}"),
                HashMap::from([("body".to_string(), Content::Text(body))]),
            )
            .unwrap();
    }
    engine
}

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_document");
    for doc_count in [100usize, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(doc_count), &doc_count, |b, &n| {
            b.iter(|| black_box(build_engine(n)));
        });
    }
    group.finish();
}

fn bench_phrase_query(c: &mut Criterion) {
    let engine = build_engine(5_000);
    let request = SearchRequest {
        query: Some(Query::match_phrase("body", "search engine")),
        agg: None,
    };
    c.bench_function("phrase_query_5000_docs", |b| {
        b.iter(|| black_box(engine.search("bench", &request).unwrap()));
    });
}

criterion_group!(benches, bench_indexing, bench_phrase_query);
criterion_main!(benches);
