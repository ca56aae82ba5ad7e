//! Planner throughput benchmark: cost per planning call at various depths

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rumble_arena::actions::MovementCatalog;
use rumble_arena::ai::{Planner, PlannerBudget};
use rumble_arena::arena::{GameState, Level};
use rumble_arena::core::config::ArenaConfig;

fn planning_state() -> (ArenaConfig, MovementCatalog, GameState) {
    let cfg = ArenaConfig::default();
    let catalog = MovementCatalog::default_catalog();
    let mut state = GameState::new(Level::default_arena());
    state.spawn_actor("a");
    state.spawn_actor("b");
    for _ in 0..20 {
        state.update(&cfg, 1.0 / 60.0);
    }
    (cfg, catalog, state)
}

fn bench_planner(c: &mut Criterion) {
    let (cfg, catalog, mut state) = planning_state();
    let planner = Planner::new(&cfg, &catalog);

    for depth in [0u32, 1, 2] {
        c.bench_function(&format!("plan depth {depth}"), |b| {
            let budget = PlannerBudget::new(depth, 3);
            b.iter(|| black_box(planner.plan(&mut state, 0, &budget)));
        });
    }
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
