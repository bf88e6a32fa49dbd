use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossterm::event::KeyCode;

use tui_gridwalk::core::{GameState, LEVELS};
use tui_gridwalk::input::map_key;
use tui_gridwalk::types::Direction;

fn bench_map_key(c: &mut Criterion) {
    let codes = [
        KeyCode::Up,
        KeyCode::Char('h'),
        KeyCode::Char('L'),
        KeyCode::Char('a'),
        KeyCode::Esc,
    ];

    c.bench_function("map_key_mixed", |b| {
        b.iter(|| {
            for code in codes {
                black_box(map_key(black_box(code)));
            }
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let fresh = GameState::from_layout(LEVELS[0]).unwrap();

    c.bench_function("apply_move", |b| {
        let mut state = fresh.clone();
        b.iter(|| {
            // Bounce between two tiles so every move stays legal.
            state.apply_move(black_box(Direction::Right));
            state.apply_move(black_box(Direction::Left));
        })
    });
}

fn bench_parse_level(c: &mut Criterion) {
    c.bench_function("parse_level", |b| {
        b.iter(|| GameState::from_layout(black_box(LEVELS[2])).unwrap())
    });
}

criterion_group!(benches, bench_map_key, bench_apply_move, bench_parse_level);
criterion_main!(benches);
