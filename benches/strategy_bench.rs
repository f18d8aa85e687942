use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use rampart::board::{layout, Flank};
use rampart::config::{StrategyConfig, UnitCatalog};
use rampart::defense::{draw, WeightedQueue, TICKET_RESOLUTION};
use rampart::host::TurnState;
use rampart::protocol::TurnFrame;
use rampart::strategy::Orchestrator;

const MID_GAME_FRAME: &str = r#"{"turnInfo": [0, 12, -1, 0], "p1Stats": [25.0, 14.0, 9.0, 0], "p1Units": [[[0, 13, 120.0, "1"], [1, 12, 120.0, "2"], [2, 11, 120.0, "3"], [5, 13, 60.0, "4"], [6, 13, 60.0, "5"], [27, 13, 120.0, "6"]], [[13, 2, 30.0, "7"], [14, 2, 30.0, "8"]], [[5, 12, 75.0, "9"], [6, 12, 40.0, "10"], [22, 12, 75.0, "11"]], [], [], [], [], [[0, 13, 120.0, "1"], [1, 12, 120.0, "2"], [2, 11, 120.0, "3"], [27, 13, 120.0, "6"]]]}"#;

fn bench_draw_two_queues(c: &mut Criterion) {
    let left: Vec<u32> = (0..12).collect();
    let right: Vec<u32> = (100..112).collect();
    c.bench_function("draw_two_queues", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| {
            let queues = vec![
                WeightedQueue::new(left.clone(), 0.4),
                WeightedQueue::new(right.clone(), 0.1),
            ];
            draw(black_box(queues), TICKET_RESOLUTION, &mut rng)
        })
    });
}

fn bench_draw_zone_cells(c: &mut Criterion) {
    let zones = [
        layout::barrier_line_cells(Flank::Left),
        layout::slanted_gate_cells(Flank::Left),
        layout::chokepoint_cells(Flank::Left),
    ];
    c.bench_function("draw_zone_cells", |b| {
        let mut rng = SmallRng::seed_from_u64(2);
        b.iter(|| {
            let queues = zones
                .iter()
                .enumerate()
                .map(|(i, cells)| WeightedQueue::new(cells.clone(), 0.1 * (i + 1) as f32))
                .collect();
            draw(black_box(queues), TICKET_RESOLUTION, &mut rng)
        })
    });
}

fn bench_rich_turn(c: &mut Criterion) {
    c.bench_function("play_turn_from_empty", |b| {
        b.iter(|| {
            let mut orch = Orchestrator::new(StrategyConfig::default(), 9);
            let mut state = TurnState::new(UnitCatalog::default(), 3, black_box(200), 12);
            orch.play_turn(&mut state)
        })
    });
}

fn bench_mid_game_turn(c: &mut Criterion) {
    let catalog = UnitCatalog::default();
    let frame = TurnFrame::parse(MID_GAME_FRAME).unwrap();
    let state = frame.to_turn_state(&catalog);
    c.bench_function("play_turn_mid_game", |b| {
        let mut scratch = state.clone();
        b.iter(|| {
            scratch.clone_from(&state);
            let mut orch = Orchestrator::new(StrategyConfig::default(), 4);
            orch.play_turn(black_box(&mut scratch))
        })
    });
}

criterion_group!(
    benches,
    bench_draw_two_queues,
    bench_draw_zone_cells,
    bench_rich_turn,
    bench_mid_game_turn,
);
criterion_main!(benches);
