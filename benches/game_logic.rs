use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{Deck, DeckRng, GameSnapshot, GameState};
use tui_memory::term::{FrameBuffer, GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            // Keep a revert pending so the tick does real work.
            if state.pending_revert().is_none() {
                let _ = state.flip_pair(0, 1);
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = DeckRng::new(12345);

    c.bench_function("deal_deck", |b| {
        b.iter(|| black_box(Deck::shuffled(&mut rng)));
    });
}

fn bench_full_game(c: &mut Criterion) {
    let deck = Deck::from_letters("ABABCDCDEFEFGHGH").unwrap();
    let pairs = [
        (0, 1),
        (0, 2),
        (1, 3),
        (4, 6),
        (5, 7),
        (8, 10),
        (9, 11),
        (12, 14),
        (13, 15),
    ];

    c.bench_function("play_full_game", |b| {
        b.iter(|| {
            let mut state = GameState::from_deck(deck, 1);
            for &(a, z) in &pairs {
                let _ = state.flip_pair(black_box(a), black_box(z));
            }
            black_box(state.is_won())
        })
    });
}

fn bench_submit_rejected(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("submit_rejected", |b| {
        b.iter(|| black_box(state.submit(black_box("7"), black_box("7"))));
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::new();
    let vp = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_deal,
    bench_full_game,
    bench_submit_rejected,
    bench_render
);
criterion_main!(benches);
