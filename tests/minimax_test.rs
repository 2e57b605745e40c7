//! Tests for the minimax player.

use tictactoe_minimax::{
    Board, GeniusPlayer, Mark, Outcome, Player, RandomPlayer, SearchResult, play_one_game,
};

#[test]
fn test_takes_winning_square() {
    let board: Board = "XX_OO____".parse().expect("Valid board");

    let mut player = GeniusPlayer::with_seed(Mark::X, 0);
    assert_eq!(player.choose_move(&board), Ok(2));
    assert!(player.last_search_nodes() > 0);

    let mut scratch = board.clone();
    let result = player.minimax(&mut scratch, Mark::X);
    // Four cells remain empty after the win.
    assert_eq!(result, SearchResult::new(Some(2), 5));
    assert_eq!(scratch, board);
}

#[test]
fn test_lowest_index_wins_ties() {
    // O wins immediately at 5 or 8 with equal scores; 1 loses to X at 8.
    let mut board: Board = "O_XOO_XX_".parse().expect("Valid board");
    assert_eq!(board.winner(), None);

    let mut player = GeniusPlayer::with_seed(Mark::O, 0);
    let result = player.minimax(&mut board, Mark::O);
    assert_eq!(result, SearchResult::new(Some(5), 3));
}

#[test]
fn test_opening_move_skips_search() {
    for seed in 0..20 {
        let mut player = GeniusPlayer::with_seed(Mark::O, seed);
        let index = player.choose_move(&Board::new()).expect("Opening move");
        assert!(index < 9);
        assert_eq!(player.last_search_nodes(), 0);
    }
}

#[test]
fn test_genius_versus_genius_ties() {
    for seed in 0..5 {
        let outcome = play_one_game(
            Box::new(GeniusPlayer::with_seed(Mark::X, seed)),
            Box::new(GeniusPlayer::with_seed(Mark::O, seed + 100)),
        )
        .expect("Game completes");
        assert_eq!(outcome, Outcome::Tied, "seed {}", seed);
    }
}

#[test]
fn test_genius_as_o_never_loses_to_random() {
    for seed in 0..1000 {
        let outcome = play_one_game(
            Box::new(RandomPlayer::with_seed(Mark::X, seed)),
            Box::new(GeniusPlayer::with_seed(Mark::O, seed)),
        )
        .expect("Game completes");
        assert_ne!(outcome, Outcome::Won(Mark::X), "seed {}", seed);
    }
}

#[test]
fn test_genius_as_x_never_loses_to_random() {
    for seed in 0..1000 {
        let outcome = play_one_game(
            Box::new(GeniusPlayer::with_seed(Mark::X, seed)),
            Box::new(RandomPlayer::with_seed(Mark::O, seed)),
        )
        .expect("Game completes");
        assert_ne!(outcome, Outcome::Won(Mark::O), "seed {}", seed);
    }
}
