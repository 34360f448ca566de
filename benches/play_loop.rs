//! Benchmarks for the play loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use card_economy::games::Variant;
use card_economy::session::Session;

/// Play the first legal card until the game is decided or stalls.
fn play_out(variant: Variant, seed: u64) -> usize {
    let mut session = match Session::new_variant(variant, seed) {
        Ok(session) => session,
        Err(_) => return 0,
    };

    let mut plays = 0;
    while plays < 500 {
        let Some(&index) = session.legal_plays().first() else {
            break;
        };
        if session.try_play(index).is_err() {
            break;
        }
        plays += 1;
    }
    plays
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("new_session_grand_engine", |b| {
        b.iter(|| Session::new_variant(black_box(Variant::GrandEngine), black_box(42)))
    });
}

fn bench_play_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("play_out");
    for variant in Variant::ALL {
        group.bench_function(variant.key(), |b| {
            b.iter(|| play_out(black_box(variant), black_box(7)))
        });
    }
    group.finish();
}

fn bench_state_view(c: &mut Criterion) {
    let session = match Session::new_variant(Variant::FactoryEmpire, 3) {
        Ok(session) => session,
        Err(_) => return,
    };

    c.bench_function("state_to_json", |b| {
        b.iter(|| black_box(session.state()).to_json())
    });
}

criterion_group!(benches, bench_setup, bench_play_out, bench_state_view);
criterion_main!(benches);
