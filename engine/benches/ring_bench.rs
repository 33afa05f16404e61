use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use snake_engine::games::SessionRng;
use snake_engine::games::snake::{Direction, GameSettings, GameState, Position, PositionRing};

const BOARD_SIZE: i32 = 100;

fn serpentine(step: i32) -> Position {
    let row = step / BOARD_SIZE;
    let col = step % BOARD_SIZE;
    let x = if row % 2 == 0 { col } else { BOARD_SIZE - 1 - col };
    Position::new(x, row % BOARD_SIZE)
}

fn long_ring(length: usize) -> PositionRing {
    let mut ring = PositionRing::new(serpentine(0), (BOARD_SIZE * BOARD_SIZE) as usize);
    for step in 1..length as i32 {
        let last = ring.move_to(serpentine(step));
        ring.grow(last);
    }
    ring
}

fn bench_move(c: &mut Criterion) {
    c.bench_function("ring_move_len_1000", |b| {
        let mut ring = long_ring(1000);
        let mut step = 1000;
        b.iter(|| {
            black_box(ring.move_to(serpentine(step)));
            step = (step + 1) % (BOARD_SIZE * BOARD_SIZE);
        })
    });
}

fn bench_grow(c: &mut Criterion) {
    c.bench_function("ring_grow_to_2000", |b| {
        b.iter(|| black_box(long_ring(2000)))
    });
}

fn bench_head_on_body(c: &mut Criterion) {
    let ring = long_ring(5000);
    c.bench_function("ring_head_on_body_len_5000", |b| {
        b.iter(|| black_box(ring.is_head_on_body()))
    });
}

fn bench_game_ticks(c: &mut Criterion) {
    c.bench_function("game_1000_ticks", |b| {
        b.iter(|| {
            let settings = GameSettings {
                ticks_per_second: 1,
                moves_per_second: 1,
                food_spawn_interval: 1,
                ..GameSettings::with_board(40, 40)
            };
            let mut state = GameState::with_settings(settings, SessionRng::new(7))
                .expect("benchmark settings are valid");
            let turns = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
            for i in 0..1000 {
                if state.tick(Some(turns[i / 5 % 4])).is_none() && state.try_restart().is_err() {
                    break;
                }
            }
            black_box(state.snapshot())
        })
    });
}

criterion_group!(benches, bench_move, bench_grow, bench_head_on_body, bench_game_ticks);
criterion_main!(benches);
