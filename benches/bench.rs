// Criterion benchmarks for the SwipeU simulation core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use swipeu::core::{GestureClassifier, MatchSimulator, SwipeDeck};
use swipeu::models::{DragInput, Profile, SwipeOutcome};

fn create_profile(id: usize) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("Student {}", id),
        age: 18 + (id % 8) as u8,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        major: "Undeclared".to_string(),
        class_year: "Freshman".to_string(),
        profile_type: vec![],
        interests: vec!["Coffee".to_string()],
        bio: None,
        image_url: String::new(),
        similarity: Some((id % 100) as u8),
    }
}

fn bench_classify(c: &mut Criterion) {
    let classifier = GestureClassifier::default();
    let drags = [
        ("drag", DragInput { down: true, movement: (40.0, -5.0), direction_x: 1.0, velocity: 0.4 }),
        ("snap_back", DragInput { down: false, movement: (40.0, -5.0), direction_x: 1.0, velocity: 0.1 }),
        ("superlike", DragInput { down: false, movement: (5.0, -220.0), direction_x: 1.0, velocity: 0.9 }),
    ];

    let mut group = c.benchmark_group("classify");
    for (name, drag) in drags {
        group.bench_with_input(BenchmarkId::from_parameter(name), &drag, |b, drag| {
            b.iter(|| classifier.classify(black_box(drag)));
        });
    }
    group.finish();
}

fn bench_match_roll(c: &mut Criterion) {
    let simulator = MatchSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    c.bench_function("match_roll_like", |b| {
        b.iter(|| simulator.roll(black_box(SwipeOutcome::Right), &mut rng));
    });
}

fn bench_swipe_through_deck(c: &mut Criterion) {
    let simulator = MatchSimulator::default();
    let mut group = c.benchmark_group("swipe_through_deck");

    for size in [10usize, 100, 1000] {
        let profiles: Vec<Profile> = (0..size).map(create_profile).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &profiles, |b, profiles| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                let mut deck = SwipeDeck::new(profiles.clone());
                for (i, profile) in profiles.iter().enumerate() {
                    let outcome = match i % 3 {
                        0 => SwipeOutcome::Left,
                        1 => SwipeOutcome::Right,
                        _ => SwipeOutcome::Up,
                    };
                    let _ = deck.swipe(&profile.id, outcome, &simulator, &mut rng);
                }
                black_box(deck.matches().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_match_roll, bench_swipe_through_deck);
criterion_main!(benches);
