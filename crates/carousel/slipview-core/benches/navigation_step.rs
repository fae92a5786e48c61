use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slipview_core::{
    Command, Config, DragLock, Inputs, NavPhase, NavigationEngine, ViewportMetrics,
};

fn mk_engine() -> NavigationEngine {
    NavigationEngine::new(
        8,
        0,
        ViewportMetrics { slide_width: 400.0 },
        DragLock::new(),
        Config::default(),
    )
}

fn drag_trace(base: f32) -> Inputs {
    let mut commands = vec![Command::GestureStart];
    for i in 0..16 {
        commands.push(Command::GestureMove {
            offset_x: base + i as f32 * 18.0,
        });
    }
    commands.push(Command::GestureRelease {
        offset_x: base + 270.0,
        velocity_x: 0.35,
        direction_x: 1.0,
    });
    Inputs { commands }
}

fn bench_drag_flick_settle(c: &mut Criterion) {
    c.bench_function("drag_flick_settle", |b| {
        b.iter(|| {
            let mut engine = mk_engine();
            let out = engine.update(0.0, black_box(drag_trace(0.0)));
            black_box(out.events.len());
            while engine.phase() != NavPhase::Idle {
                engine.update(1.0 / 60.0, Inputs::default());
            }
            black_box(engine.position())
        })
    });
}

fn bench_gesture_move_tracking(c: &mut Criterion) {
    c.bench_function("gesture_move_tracking", |b| {
        let mut engine = mk_engine();
        engine.update(0.0, Inputs::one(Command::GestureStart));
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 7.0) % 2800.0;
            engine.update(0.0, Inputs::one(Command::GestureMove { offset_x: x }));
            black_box(engine.position())
        })
    });
}

criterion_group!(benches, bench_drag_flick_settle, bench_gesture_move_tracking);
criterion_main!(benches);
