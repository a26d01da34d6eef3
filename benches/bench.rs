use criterion::{criterion_group, criterion_main, Criterion};

use resource_path::*;

fn benchmark(c: &mut Criterion) {
    c.bench_function("from_path", |b| {
        b.iter(|| Resource::from_path("users/JDoe/orders/12345"))
    });

    c.bench_function("from_segments", |b| {
        b.iter(|| Resource::from_segments("/users//JDoe/orders/", "/12345/"))
    });

    let resource = Resource::from_segments("/Users/JDoe/orders", "/12345/").unwrap();
    let loose = RoutingConfig::new();
    let strict = RoutingConfig::new().case_sensitive(true).strict(true);

    c.bench_function("to_string", |b| b.iter(|| resource.to_string()));

    c.bench_function("value_of/loose", |b| {
        b.iter(|| resource.value_of(Some(&loose), false))
    });

    c.bench_function("value_of/strict", |b| {
        b.iter(|| resource.value_of(Some(&strict), false))
    });

    let json = r#"[
        {"collection": "/users/jdoe/orders", "name": "/12345", "data": {"orderId": 12345},
         "createdOn": "1991-01-15T16:45:00.000Z", "modifiedOn": "1991-05-05T08:00:25.000Z"},
        {"collection": "", "name": "/", "data": "<h1>hello world</h1>"}
    ]"#;

    c.bench_function("parse", |b| b.iter(|| Resource::parse(json)));
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
