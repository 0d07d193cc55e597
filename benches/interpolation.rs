use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ::interpolate::{context, interpolate, interpolate_with_options, Delimiters, Map, Options};

fn small_context() -> Map {
    context! {
        "name": "Alice",
        "age": 30,
        "active": true
    }
}

fn nested_context() -> Map {
    context! {
        "user": {
            "profile": {
                "name": "Alice",
                "contact": {
                    "email": "alice@example.com",
                    "phone": "555-0100"
                }
            },
            "roles": ["admin", "developer", "reviewer"]
        }
    }
}

fn benchmark_mixed_text(c: &mut Criterion) {
    let ctx = small_context();
    c.bench_function("mixed_text_three_tokens", |b| {
        b.iter(|| {
            interpolate(
                black_box("{{name}} is {{age}} years old (active: {{active}})"),
                black_box(&ctx),
            )
            .unwrap()
        })
    });
}

fn benchmark_whole_template(c: &mut Criterion) {
    let ctx = nested_context();
    c.bench_function("whole_template_object", |b| {
        b.iter(|| interpolate(black_box("{{user.profile}}"), black_box(&ctx)).unwrap())
    });
}

fn benchmark_deep_path(c: &mut Criterion) {
    let ctx = nested_context();
    c.bench_function("deep_path_resolution", |b| {
        b.iter(|| {
            interpolate(
                black_box("email: {{user.profile.contact.email}}"),
                black_box(&ctx),
            )
            .unwrap()
        })
    });
}

fn benchmark_token_count(c: &mut Criterion) {
    let ctx = small_context();
    let mut group = c.benchmark_group("token_count");
    for count in [1usize, 8, 32] {
        let template = "{{name}} ".repeat(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &template, |b, t| {
            b.iter(|| interpolate(black_box(t), black_box(&ctx)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_custom_delimiters(c: &mut Criterion) {
    let ctx = small_context();
    let options = Options::new().with_delimiters(Delimiters::literal("<%", "%>"));
    c.bench_function("custom_delimiters", |b| {
        b.iter(|| {
            interpolate_with_options(
                black_box("<%name%> is <%age%>"),
                black_box(&ctx),
                black_box(&options),
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_mixed_text,
    benchmark_whole_template,
    benchmark_deep_path,
    benchmark_token_count,
    benchmark_custom_delimiters
);
criterion_main!(benches);
