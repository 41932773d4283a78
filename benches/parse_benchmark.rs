//! Benchmarks for armydoc parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic documents with a growing number of appendices.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use armydoc::parser::TextParser;
use armydoc::{ParseOptions, RenderOptions};

/// Creates a synthetic document with the given number of appendices.
fn create_test_document(appendix_count: usize) -> String {
    let mut content = String::new();

    // Header properties
    content.push_str("ΣΧΕΤ = Φ.900/1/123 | Φ.900/2/456\n");
    content.push_str("ΠΡΟΣ = 1η ΜΠ | 2η ΜΠ | 3η ΜΠ | 4η ΜΠ\n");
    content.push_str("ΚΟΙΝ = ΓΕΣ\n");
    content.push_str("ΒΑΘΜΟΣ = ΑΔΙΑΒΑΘΜΗΤΟ\n");
    content.push_str("ΣΧΕΔΙΟ = Σ.\n");

    content.push_str("# ΚΟΡΜΟΣ\n");
    for i in 1..=20 {
        content.push_str(&format!("{}. Παράγραφος *{}* του κορμού\n", i, i));
        content.push_str("\tα. Υποπαράγραφος με _έμφαση_\n");
        content.push_str("\t\tσυνέχεια κειμένου/\n");
    }

    // Appendix names cycle through the single-letter ordinals
    let letters = ["Α", "Β", "Γ", "Δ", "Ε", "Ζ", "Η", "Θ"];
    for i in 0..appendix_count {
        let letter = letters[i % letters.len()];
        content.push_str(&format!("## {} Παράρτημα {}\n", letter, i + 1));
        content.push_str("% name:Δύναμη border:1\n");
        content.push_str(":Μονάδα | Άνδρες: | <\n");
        for row in 0..10 {
            content.push_str(&format!("^ | {} | {}\n", row * 10, row));
        }
        content.push_str("/%\n");

        content.push_str(&format!("# {}-1 Προσθήκη\n", letter));
        content.push_str(">< ΧΑΡΤΗΣ ><\n");
        content.push_str(&format!("# {}-1-1 Σχέδιο\n", letter));
        content.push_str("img: maps/area.png\n");
        content.push_str("$\n");
    }

    content.push_str("ΤΕΛΟΣ\n");
    content
}

/// Benchmark the line pass alone.
fn bench_line_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_pass");

    for appendix_count in [1, 8, 32].iter() {
        let source = create_test_document(*appendix_count);
        let parser = TextParser::with_options(source, ParseOptions::new().raw());

        group.bench_function(format!("{}_appendices", appendix_count), |b| {
            b.iter(|| black_box(&parser).parse_lines().unwrap());
        });
    }

    group.finish();
}

/// Benchmark parsing with header processing and restructuring.
fn bench_full_parse(c: &mut Criterion) {
    let source = create_test_document(8);

    c.bench_function("full_parse", |b| {
        b.iter(|| armydoc::parse_str(black_box(&source)).unwrap());
    });
}

/// Benchmark HTML rendering, parallel and sequential.
fn bench_html_rendering(c: &mut Criterion) {
    let doc = armydoc::parse_str(&create_test_document(32)).unwrap();
    let mut group = c.benchmark_group("html_rendering");

    group.bench_function("parallel", |b| {
        let options = RenderOptions::default();
        b.iter(|| armydoc::render::to_html(black_box(&doc), &options).unwrap());
    });

    group.bench_function("sequential", |b| {
        let options = RenderOptions::new().sequential();
        b.iter(|| armydoc::render::to_html(black_box(&doc), &options).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_line_pass,
    bench_full_parse,
    bench_html_rendering,
);
criterion_main!(benches);
