use rand::{rngs::StdRng, SeedableRng};

use super::super::{Game, GameError, GameState, Intent, Mode, Phase, Token};
use crate::{
    driver::direct::{Recorder, Render},
    store::{FileStore, MemoryStore, ScoreStore},
};

fn game_with(store: impl ScoreStore + 'static, seed: u64) -> Game {
    Game::with_rng(Box::new(store), Box::new(StdRng::seed_from_u64(seed)))
}

fn saved(game: &Game) -> Option<GameState> {
    game.store().load()
}

#[test]
fn fresh_game_defaults_without_saving() {
    let game = game_with(MemoryStore::default(), 0);
    assert_eq!(*game.state(), GameState::default());
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(saved(&game), None);
}

#[test]
fn loads_saved_state() {
    let state = GameState {
        is_bonus_mode: true,
        normal_score: 2,
        bonus_score: 9,
    };
    let game = game_with(MemoryStore::with_state(state), 0);
    assert_eq!(game.mode(), Mode::Bonus);
    assert_eq!(game.state().current_score(), 9);

    let mut recorder = Recorder::default();
    game.start(&mut recorder);
    assert_eq!(
        recorder.renders,
        vec![
            Render::Mode(Mode::Bonus),
            Render::Score(9),
            Render::Board(Mode::Bonus.active_tokens()),
        ]
    );
}

#[test]
fn rock_in_normal_mode() {
    // Play fresh games until both outcomes have been seen
    let (mut won, mut lost) = (false, false);
    for seed in 0..64 {
        let mut game = game_with(MemoryStore::default(), seed);
        let mut recorder = Recorder::default();
        let result = game.choose_token(Token::Rock, &mut recorder).unwrap();
        if result.player_wins {
            won = true;
            assert_eq!(result.house_token, Token::Scissors);
            assert_eq!(game.state().normal_score, 1);
        } else {
            lost = true;
            assert_eq!(result.house_token, Token::Paper);
            // Already at zero, so the loss doesn't go negative
            assert_eq!(game.state().normal_score, 0);
        }
        assert_eq!(game.state().bonus_score, 0);
        assert_eq!(saved(&game), Some(*game.state()));
        assert_eq!(recorder.last_score(), Some(game.state().normal_score));
        assert_eq!(game.phase(), Phase::Revealed);
    }
    assert!(won && lost);
}

#[test]
fn spock_in_bonus_mode() {
    let state = GameState::default().switch_mode(Mode::Bonus);
    for seed in 0..32 {
        let mut game = game_with(MemoryStore::with_state(state), seed);
        let result = game
            .choose_token(Token::Spock, &mut Recorder::default())
            .unwrap();
        if result.player_wins {
            assert!(matches!(result.house_token, Token::Rock | Token::Scissors));
            assert_eq!(game.state().bonus_score, 1);
        } else {
            assert!(matches!(result.house_token, Token::Paper | Token::Lizard));
            assert_eq!(game.state().bonus_score, 0);
        }
        assert_eq!(game.state().normal_score, 0);
    }
}

#[test]
fn locked_while_revealed() {
    let mut game = game_with(MemoryStore::default(), 11);
    let mut recorder = Recorder::default();
    game.choose_token(Token::Paper, &mut recorder).unwrap();
    let state = *game.state();
    let renders = recorder.renders.len();

    assert_eq!(
        game.choose_token(Token::Rock, &mut recorder),
        Err(GameError::Locked {
            action: "choose a token",
            phase: Phase::Revealed
        })
    );
    assert_eq!(
        game.handle(Intent::ToggleMode, &mut recorder),
        Err(GameError::Locked {
            action: "switch modes",
            phase: Phase::Revealed
        })
    );
    assert_eq!(*game.state(), state);
    assert_eq!(recorder.renders.len(), renders);

    // Rules can still be read
    game.handle(Intent::ShowRules, &mut recorder).unwrap();
    assert_eq!(
        recorder.renders.last(),
        Some(&Render::Rules(Mode::Normal.assets().clone()))
    );

    game.handle(Intent::PlayAgain, &mut recorder).unwrap();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(
        recorder.renders.last(),
        Some(&Render::Board(Mode::Normal.active_tokens()))
    );
    game.choose_token(Token::Rock, &mut recorder).unwrap();
}

#[test]
fn play_again_needs_a_result() {
    let mut game = game_with(MemoryStore::default(), 0);
    assert_eq!(
        game.play_again(&mut Recorder::default()),
        Err(GameError::Locked {
            action: "play again",
            phase: Phase::Idle
        })
    );
}

#[test]
fn inactive_token_rejected() {
    let mut game = game_with(MemoryStore::default(), 0);
    assert_eq!(
        game.choose_token(Token::Lizard, &mut Recorder::default()),
        Err(GameError::InactiveToken(Token::Lizard, Mode::Normal))
    );
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(saved(&game), None);
}

#[test]
fn toggling_twice_keeps_scores() {
    let state = GameState {
        is_bonus_mode: false,
        normal_score: 5,
        bonus_score: 0,
    };
    let mut game = game_with(MemoryStore::with_state(state), 0);
    let mut recorder = Recorder::default();

    game.toggle_mode(&mut recorder).unwrap();
    assert_eq!(game.mode(), Mode::Bonus);
    assert_eq!(game.state().current_score(), 0);
    assert_eq!(recorder.last_score(), Some(0));
    assert_eq!(saved(&game), Some(state.switch_mode(Mode::Bonus)));

    game.toggle_mode(&mut recorder).unwrap();
    assert_eq!(*game.state(), state);
    assert_eq!(recorder.last_score(), Some(5));
    assert_eq!(saved(&game), Some(state));
    assert!(recorder.renders.contains(&Render::Mode(Mode::Bonus)));
    assert!(recorder
        .renders
        .contains(&Render::Board(Mode::Bonus.active_tokens())));
}

#[test]
fn failed_writes_do_not_stop_play() {
    let mut game = game_with(MemoryStore::failing(), 5);
    let mut recorder = Recorder::default();
    for _ in 0..10 {
        game.choose_token(Token::Scissors, &mut recorder).unwrap();
        game.play_again(&mut recorder).unwrap();
    }
    game.toggle_mode(&mut recorder).unwrap();
    assert_eq!(game.mode(), Mode::Bonus);
    assert_eq!(recorder.results().len(), 10);
    assert_eq!(saved(&game), None);
}

#[test]
fn scores_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut game = game_with(FileStore::new(&path), 21);
    let mut recorder = Recorder::default();
    game.toggle_mode(&mut recorder).unwrap();
    for _ in 0..5 {
        game.choose_token(Token::Lizard, &mut recorder).unwrap();
        game.play_again(&mut recorder).unwrap();
    }
    let state = *game.state();
    drop(game);

    let reloaded = game_with(FileStore::new(&path), 0);
    assert_eq!(*reloaded.state(), state);
    assert_eq!(reloaded.mode(), Mode::Bonus);
}
