//! Benchmark harness for the comment scanners.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p excom_scanner

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use excom_scanner::{scan_str, Dialect, TabWidth};

const C_SOURCE: &str = r#"
/*
 * Ring buffer used by the logger.
 */
#include <stdio.h>
#include <string.h>

typedef struct {
	char data[256]; // backing storage
	int head;	/* write position */
	int tail;	/* read position */
} ring_t;

static void ring_put(ring_t *r, char c) {
	r->data[r->head++ % 256] = c; // wraps
	printf("put: %c // not a comment\n", c);
}
"#;

const PY_SOURCE: &str = r#"
import sys  # for argv

def main():
	"""Entry point.

	Reads arguments and prints them.
	"""
	for arg in sys.argv[1:]:  # skip program name
		print(arg)
	x = '''inline block'''
"#;

const XML_SOURCE: &str = r#"
<?xml version="1.0"?>
<!-- configuration root -->
<config>
	<!-- multi
	     line -->
	<entry key="a" value="b"/>
</config>
"#;

fn bench_dialects(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialects");
    for (dialect, source) in [
        (Dialect::CStyle, C_SOURCE),
        (Dialect::PyStyle, PY_SOURCE),
        (Dialect::XmlStyle, XML_SOURCE),
    ] {
        group.bench_with_input(BenchmarkId::new("scan", dialect), source, |b, source| {
            b.iter(|| scan_str(dialect, black_box(source), TabWidth::DEFAULT));
        });
    }
    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for copies in [10, 100, 1000] {
        let source = C_SOURCE.repeat(copies);
        group.bench_with_input(
            BenchmarkId::new("c_style", copies),
            &source,
            |b, source| {
                b.iter(|| scan_str(Dialect::CStyle, black_box(source), TabWidth::DEFAULT));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dialects, bench_scaling);
criterion_main!(benches);
