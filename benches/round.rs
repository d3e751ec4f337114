use criterion::{black_box, criterion_group, criterion_main, Criterion};

use card_round::cards::{CardCatalog, Deck};
use card_round::core::{GameRng, GameSettings, PlayerCollection};
use card_round::CardGameBuilder;

fn shuffle_default_deck(c: &mut Criterion) {
    let catalog = CardCatalog::from_settings(&GameSettings::default());
    let mut deck = Deck::new(catalog.cards().to_vec(), Box::new(GameRng::new(1))).unwrap();

    c.bench_function("shuffle 56 cards", |b| {
        b.iter(|| {
            deck.shuffle();
            black_box(deck.remaining())
        })
    });
}

fn play_full_game(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("play game (4 players)", |b| {
        b.iter(|| {
            seed += 1;
            let mut game = CardGameBuilder::new(GameSettings::default())
                .seed(seed)
                .players(PlayerCollection::numbered(4).unwrap())
                .build()
                .unwrap();
            while !game.is_game_over() {
                game.execute_round().unwrap();
            }
            black_box(game.rounds_played())
        })
    });
}

criterion_group!(benches, shuffle_default_deck, play_full_game);
criterion_main!(benches);
