use battle_vote::card::{CardRenderer, CardState, Reaction, VoteCard};
use battle_vote::core::CardConfig;
use battle_vote::countdown::TimeLeft;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tokio::runtime::Runtime;

fn bench_countdown_to_zero(c: &mut Criterion) {
    let start = TimeLeft::new(3, 5, 23).unwrap();
    c.bench_function("countdown_tick_to_zero", |b| {
        b.iter(|| {
            let mut time = black_box(start);
            while !time.is_expired() {
                time = time.tick();
            }
            time
        })
    });
}

fn bench_render_card(c: &mut Criterion) {
    let config = CardConfig::default();
    let renderer = CardRenderer::new(&config);
    let mut state = CardState::from_config(&config);
    state.reactions = state.reactions.incremented(Reaction::Fire);
    state.confirmation_visible = true;

    c.bench_function("render_card", |b| {
        b.iter(|| renderer.render(black_box(&state), 0))
    });
}

fn bench_react(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let card = rt.block_on(async { VoteCard::mount_simulated(CardConfig::default()) });

    c.bench_function("react", |b| b.iter(|| card.react(black_box(Reaction::Fox))));

    rt.block_on(card.unmount());
}

criterion_group!(benches, bench_countdown_to_zero, bench_render_card, bench_react);
criterion_main!(benches);
