use criterion::{criterion_group, criterion_main, Criterion};
use snake_common::games::SessionRng;
use snake_common::games::snake::{Direction, FoodPlacement, MemoryScoreStore, SnakeGameState, SnakeSettings};

const SPIRAL: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

fn play_until_game_over(food_placement: FoodPlacement) {
    let settings = SnakeSettings {
        food_placement,
        seed: Some(7),
        ..SnakeSettings::default()
    };
    let mut rng = SessionRng::new(7);
    let store = MemoryScoreStore::default();
    let mut state = SnakeGameState::new(&settings, 0, &mut rng);

    let mut step = 0usize;
    while state.status().is_running() && step < 10_000 {
        state.set_direction(SPIRAL[(step / 6) % SPIRAL.len()]);
        state.tick(&mut rng, &store);
        step += 1;
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("uniform_food", |b| {
        b.iter(|| play_until_game_over(FoodPlacement::Uniform))
    });

    group.bench_function("avoid_snake_food", |b| {
        b.iter(|| play_until_game_over(FoodPlacement::AvoidSnake))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
