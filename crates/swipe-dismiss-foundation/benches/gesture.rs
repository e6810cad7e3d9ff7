use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipe_dismiss_foundation::{
    DragToCloseGesture, GestureConfig, PointerEvent, PointerEventKind, Size,
};

const PANEL: Size = Size::new(1080.0, 1920.0);
const MOVE_SAMPLES: &[usize] = &[16, 128];

fn drag_stream(moves: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(PointerEvent::at(PointerEventKind::Down, 540.0, 100.0));
    for step in 0..moves {
        let y = 100.0 + step as f32 * 6.0;
        events.push(PointerEvent::at(PointerEventKind::Move, 540.0 + (step % 3) as f32, y));
    }
    events.push(PointerEvent::at(PointerEventKind::Up, 540.0, 100.0 + moves as f32 * 6.0));
    events
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_to_close_stream");
    for &moves in MOVE_SAMPLES {
        let events = drag_stream(moves);
        group.bench_with_input(BenchmarkId::from_parameter(moves), &events, |b, events| {
            let mut gesture = DragToCloseGesture::new(GestureConfig::default().shared());
            b.iter(|| {
                let mut outcome = None;
                for event in events {
                    match event.kind {
                        PointerEventKind::Up => outcome = Some(gesture.handle_release(PANEL)),
                        _ => {
                            if gesture.should_intercept(event) {
                                black_box(gesture.handle_move(event));
                            }
                        }
                    }
                }
                black_box(outcome)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag_stream);
criterion_main!(benches);
