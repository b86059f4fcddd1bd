//! Benchmarks for card list rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use wisata::app::{Message, Model, update};
use wisata::ui::layout::ListLayout;

fn bench_render_list(c: &mut Criterion) {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let mut model = Model::new((100, 40), 8);

    c.bench_function("render_list", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| wisata::ui::render(black_box(&mut model), frame))
                .unwrap();
        });
    });
}

fn bench_render_with_dialog(c: &mut Criterion) {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let mut model = update(Model::new((100, 40), 8), Message::ShowDetail(4));

    c.bench_function("render_with_dialog", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| wisata::ui::render(black_box(&mut model), frame))
                .unwrap();
        });
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let layout = ListLayout::new(10, 8);

    c.bench_function("layout_hit", |b| {
        b.iter(|| {
            for row in 0..layout.total_rows() {
                black_box(layout.hit(black_box(row)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_render_list,
    bench_render_with_dialog,
    bench_hit_test
);
criterion_main!(benches);
