//! Whole-game scenario tests, driving the engine the way the terminal
//! front end drives it.

use scoundrel::{Game, GameOutcome, MAX_HEALTH};

fn first_live_slot(game: &Game) -> Option<usize> {
    game.room().iter().position(|slot| slot.is_some())
}

/// Every card in play, wherever it currently lives.
fn cards_in_play(game: &Game) -> usize {
    game.dungeon().len()
        + game.live_cards()
        + game.graveyard().len()
        + game.weapon_kills().len()
        + usize::from(game.weapon().is_some())
}

fn assert_invariants(game: &Game) {
    assert!(
        (0..=MAX_HEALTH).contains(&game.health()),
        "health {} out of bounds",
        game.health()
    );
    assert_eq!(game.is_alive(), game.health() > 0);
    assert!(
        game.weapon_kills().is_empty() || game.weapon().is_some(),
        "kill history without a weapon"
    );
    assert_eq!(cards_in_play(game), 44, "cards leaked or duplicated");
    for card in game.dungeon().cards() {
        assert!(
            !(card.suit.is_red() && card.value > 10),
            "pruned card {:?} reappeared",
            card
        );
    }
}

/// Interact-first-slot policy until the game ends.
fn play_out(mut game: Game, bare: bool) -> (Game, GameOutcome) {
    for _ in 0..200 {
        if let Some(outcome) = game.outcome() {
            return (game, outcome);
        }
        let slot = first_live_slot(&game).expect("a live game always has a live card");
        game.interact(slot, bare);
        assert_invariants(&game);
    }
    panic!("game did not terminate");
}

#[test]
fn games_reach_a_terminal_state() {
    for seed in 0..25 {
        let (game, outcome) = play_out(Game::new(seed), false);
        match outcome {
            GameOutcome::Dead => assert!(!game.is_alive(), "seed {seed}"),
            GameOutcome::Won => {
                assert!(game.is_alive(), "seed {seed}");
                assert!(game.has_won(), "seed {seed}");
                assert!(game.in_final_room(), "seed {seed}");
                assert!(game.dungeon().is_empty(), "seed {seed}");
                assert_eq!(game.live_cards(), 0, "seed {seed}");
            }
        }
    }
}

#[test]
fn barehanded_games_also_terminate_cleanly() {
    for seed in 100..110 {
        let (game, outcome) = play_out(Game::new(seed), true);
        if outcome == GameOutcome::Dead {
            assert_eq!(game.health(), 0, "seed {seed}");
        }
        // Barehanded fights never touch the kill history.
        assert!(game.weapon_kills().is_empty(), "seed {seed}");
    }
}

#[test]
fn avoided_rooms_sink_to_the_bottom_of_the_dungeon() {
    let mut game = Game::new(7);
    let room_before: Vec<_> = game.room().iter().flatten().copied().collect();
    let dungeon_before = game.dungeon().len();

    assert!(game.avoid());

    // Same dungeon size: four buried, four redrawn.
    assert_eq!(game.dungeon().len(), dungeon_before);
    assert_eq!(&game.dungeon().cards()[..4], room_before.as_slice());
    assert_invariants(&game);
}

#[test]
fn identical_seeds_replay_identically() {
    let (game1, outcome1) = play_out(Game::new(2024), false);
    let (game2, outcome2) = play_out(Game::new(2024), false);

    assert_eq!(outcome1, outcome2);
    assert_eq!(game1.health(), game2.health());
    assert_eq!(game1.turn(), game2.turn());
    assert_eq!(game1.graveyard(), game2.graveyard());
}

#[test]
fn a_session_can_be_snapshotted_mid_game() {
    let mut game = Game::new(31);
    game.interact(0, false);
    game.interact(1, false);

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    // The restored game continues exactly like the original.
    let (done1, outcome1) = play_out(game, false);
    let (done2, outcome2) = play_out(restored, false);
    assert_eq!(outcome1, outcome2);
    assert_eq!(done1.turn(), done2.turn());
    assert_eq!(done1.health(), done2.health());
}
