use common::{Column, RowSet, Value};
use criterion::{Criterion, criterion_group, criterion_main};
use reports::{escape_html, format_money, render_table};
use std::hint::black_box;

/// Builds an Orders-shaped row set with `n` rows.
fn orders_rows(n: i64) -> RowSet {
    let mut rows = RowSet::new(vec![
        Column::inferred("OrderId"),
        Column::inferred("Cliente"),
        Column::inferred("Quantity"),
        Column::inferred("Total"),
    ]);
    for i in 0..n {
        rows.push_row(vec![
            Value::Integer(i),
            Value::from(format!("Cliente <{i}> & Cia")),
            Value::Integer(i % 7 + 1),
            Value::Real(i as f64 * 1_234.56),
        ]);
    }
    rows
}

fn bench_render_100_rows(c: &mut Criterion) {
    let rows = orders_rows(100);
    c.bench_function("reports/render_table_100_rows", |b| {
        b.iter(|| render_table(black_box(&rows)));
    });
}

fn bench_render_10000_rows(c: &mut Criterion) {
    let rows = orders_rows(10_000);
    c.bench_function("reports/render_table_10000_rows", |b| {
        b.iter(|| render_table(black_box(&rows)));
    });
}

fn bench_format_money(c: &mut Criterion) {
    c.bench_function("reports/format_money", |b| {
        b.iter(|| format_money(black_box(9_876_543_210)));
    });
}

fn bench_escape_html(c: &mut Criterion) {
    let text = "Tom &amp; Jerry <script>alert('x')</script> \"quoted\"".repeat(8);
    c.bench_function("reports/escape_html", |b| {
        b.iter(|| escape_html(black_box(&text)).len());
    });
}

criterion_group!(
    benches,
    bench_render_100_rows,
    bench_render_10000_rows,
    bench_format_money,
    bench_escape_html
);
criterion_main!(benches);
