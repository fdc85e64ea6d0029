use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emptystate::{EmptyStateAction, EmptyStateModel, OverlayView};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

fn model(words: usize) -> EmptyStateModel {
    let message = (0..words)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    EmptyStateModel::default()
        .with_image(" ____\n|    |\n|____|")
        .with_message(message)
        .with_action(EmptyStateAction::without_handler("Add an item"))
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_layout");

    for &words in &[8usize, 64, 512] {
        let overlay = OverlayView::new(model(words));
        group.bench_with_input(BenchmarkId::from_parameter(words), &words, |b, _| {
            b.iter(|| black_box(overlay.layout(black_box(Rect::new(0, 0, 120, 40)))))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_render");

    for &(width, height) in &[(80u16, 24u16), (200, 60)] {
        let overlay = OverlayView::new(model(64));
        let area = Rect::new(0, 0, width, height);
        group.bench_function(format!("{width}x{height}"), |b| {
            b.iter(|| {
                let mut buf = Buffer::empty(area);
                (&overlay).render(area, &mut buf);
                black_box(buf)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
