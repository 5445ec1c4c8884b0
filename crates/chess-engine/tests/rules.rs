//! Game-level scenarios and properties of the rules engine.

use chess_core::{PieceKind, Player, Square};
use chess_engine::{Board, BoardError, GameError, GameState, GameStatus};
use proptest::prelude::*;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

/// Plays `picks.len()` plies, each choosing a legal move by index.
/// Stops early if the game ends.
fn play_random(game: &mut GameState, picks: &[usize]) -> usize {
    let mut played = 0;
    for &pick in picks {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[pick % moves.len()];
        game.apply_legal_move(m.from(), m.to()).unwrap();
        played += 1;
    }
    played
}

#[test]
fn fools_mate_is_checkmate_for_player_one() {
    let mut game = GameState::new();
    for ((fr, fc), (tr, tc)) in [
        ((1, 2), (2, 2)),
        ((6, 3), (5, 3)),
        ((1, 1), (3, 1)),
        ((7, 4), (3, 0)),
    ] {
        game.apply_legal_move(sq(fr, fc), sq(tr, tc)).unwrap();
    }

    assert_eq!(game.status().code(), 0);
    assert_eq!(game.status().winner(), Some(Player::Player2));
    assert!(game.legal_moves().is_empty());
    assert!(matches!(
        game.apply_legal_move(sq(0, 1), sq(2, 2)),
        Err(GameError::GameOver(GameStatus::Checkmate { .. }))
    ));
}

#[test]
fn pawn_takes_advanced_pawn() {
    let mut game = GameState::new();
    game.apply_legal_move(sq(1, 3), sq(3, 3)).unwrap();
    game.apply_legal_move(sq(6, 4), sq(4, 4)).unwrap();
    let take = game.apply_legal_move(sq(3, 3), sq(4, 4)).unwrap();
    assert!(take.is_take());
    assert_eq!(game.board().count(PieceKind::Pawn, Player::Player2), 7);
    assert_eq!(game.history().last().unwrap().captured.unwrap().kind(), PieceKind::Pawn);
}

#[test]
fn stalemate_position_from_custom_board() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Player::Player2, sq(7, 0));
    board.place(PieceKind::Queen, Player::Player1, sq(5, 1));
    board.place(PieceKind::King, Player::Player1, sq(0, 7));
    board.set_side_to_move(Player::Player2);
    let game = GameState::from_board(board).unwrap();

    assert_eq!(game.status(), GameStatus::Stalemate);
    assert_eq!(game.status().code(), 2);
    assert!(!game.is_in_check(Player::Player2));
    assert!(game.is_square_attacked(sq(6, 0), Player::Player1));
}

#[test]
fn custom_board_with_capturable_king_is_rejected() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Player::Player1, sq(0, 7));
    board.place(PieceKind::Rook, Player::Player1, sq(3, 0));
    board.place(PieceKind::King, Player::Player2, sq(7, 0));

    assert_eq!(
        GameState::from_board(board),
        Err(BoardError::WaitingKingAttacked {
            player: Player::Player2
        })
    );

    // Player 2 to move: a plain check, and the king is never capturable
    board.set_side_to_move(Player::Player2);
    let game = GameState::from_board(board).unwrap();
    assert!(game.is_in_check(Player::Player2));
    assert_eq!(game.status(), GameStatus::Ongoing);
    for m in &game.legal_moves() {
        let target = game.board().piece_at(m.to()).map(|p| p.kind());
        assert_ne!(target, Some(PieceKind::King));
    }
}

#[test]
fn queen_move_into_stalemate_then_undo() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Player::Player2, sq(7, 0));
    board.place(PieceKind::Queen, Player::Player1, sq(4, 1));
    board.place(PieceKind::King, Player::Player1, sq(0, 7));
    let mut game = GameState::from_board(board).unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);

    game.apply_legal_move(sq(4, 1), sq(5, 1)).unwrap();
    assert_eq!(game.status(), GameStatus::Stalemate);

    game.undo_move();
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.side_to_move(), Player::Player1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn undo_restores_every_prior_state(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        let mut game = GameState::new();
        let mut snapshots = vec![game.clone()];
        for &pick in &picks {
            if play_random(&mut game, &[pick]) == 0 {
                break;
            }
            snapshots.push(game.clone());
        }

        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            prop_assert!(game.undo_move().is_some());
            prop_assert_eq!(&game, &expected);
        }
        prop_assert!(game.undo_move().is_none());
    }

    #[test]
    fn pieces_stay_where_the_grid_says(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        let mut game = GameState::new();
        play_random(&mut game, &picks);
        for square in Square::all() {
            if let Some(piece) = game.board().piece_at(square) {
                prop_assert_eq!(piece.square(), square);
            }
        }
        for player in Player::ALL {
            prop_assert_eq!(game.board().count(PieceKind::King, player), 1);
        }
    }

    #[test]
    fn valid_moves_split_into_peaceful_and_takes(picks in prop::collection::vec(any::<usize>(), 0..30)) {
        let mut game = GameState::new();
        play_random(&mut game, &picks);
        for square in Square::all() {
            let peaceful = game.valid_peaceful_moves(square);
            let takes = game.valid_piece_takes(square);
            let all = game.valid_moves(square);
            prop_assert_eq!(all.len(), peaceful.len() + takes.len());
            for to in &peaceful {
                prop_assert!(!takes.contains(*to));
                prop_assert!(game.board().piece_at(*to).is_none());
            }
            for to in &takes {
                prop_assert!(all.contains(*to));
                let owner = game.board().piece_at(*to).map(|p| p.player());
                let mover = game.board().piece_at(square).map(|p| p.player());
                prop_assert!(owner.is_some() && owner != mover);
            }
            for to in &game.legal_moves_from(square) {
                prop_assert!(all.contains(*to));
            }
        }
    }

    #[test]
    fn legal_moves_never_leave_own_king_attacked(picks in prop::collection::vec(any::<usize>(), 0..30)) {
        let mut game = GameState::new();
        play_random(&mut game, &picks);
        let mover = game.side_to_move();
        for m in &game.legal_moves() {
            let mut next = game.clone();
            next.apply_raw_move(m.from(), m.to()).unwrap();
            prop_assert!(!next.is_in_check(mover));
        }
    }

    #[test]
    fn status_matches_legal_moves_and_check(picks in prop::collection::vec(any::<usize>(), 0..60)) {
        let mut game = GameState::new();
        play_random(&mut game, &picks);
        let no_moves = game.legal_moves().is_empty();
        let in_check = game.is_in_check(game.side_to_move());
        let expected = match (no_moves, in_check) {
            (false, _) => GameStatus::Ongoing,
            (true, true) => GameStatus::Checkmate { winner: game.side_to_move().opposite() },
            (true, false) => GameStatus::Stalemate,
        };
        prop_assert_eq!(game.status(), expected);
    }
}
