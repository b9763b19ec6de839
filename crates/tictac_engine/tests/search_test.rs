//! Tests for computer move selection.

use std::collections::HashSet;
use tictac_engine::{
    Board, Outcome, Player, Position, best_move, evaluate, minimax, random_move,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Root choice made with plain, unpruned minimax.
fn reference_move(board: &Board, own: Player) -> Option<Position> {
    if board.is_blank() {
        return Some(Position::Center);
    }
    let mut best: Option<(Position, i32)> = None;
    for pos in board.empty_positions() {
        let next = board.place(pos, own).unwrap();
        let score = minimax(&next, 0, false, own, own.opponent());
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

fn collect_positions(board: Board, to_move: Player, seen: &mut HashSet<(Board, Player)>) {
    if evaluate(&board).is_over() || !seen.insert((board, to_move)) {
        return;
    }
    for pos in board.empty_positions() {
        let next = board.place(pos, to_move).unwrap();
        collect_positions(next, to_move.opponent(), seen);
    }
}

/// Engine plays `engine`; the other side tries every legal reply.
fn assert_never_loses(board: Board, to_move: Player, engine: Player) {
    match evaluate(&board) {
        Outcome::Won { winner, .. } => {
            assert_eq!(winner, engine, "engine lost:\n{}", board);
            return;
        }
        Outcome::Draw => return,
        Outcome::InProgress => {}
    }
    if to_move == engine {
        let pos = best_move(&board, engine).expect("open square available");
        assert!(board.is_empty(pos), "engine chose occupied {}", pos);
        assert_never_loses(board.place(pos, engine).unwrap(), to_move.opponent(), engine);
    } else {
        for pos in board.empty_positions() {
            assert_never_loses(board.place(pos, to_move).unwrap(), to_move.opponent(), engine);
        }
    }
}

#[test]
fn test_blocks_threat() {
    assert_eq!(best_move(&board("XX./.O./..."), Player::O).map(|p| p.to_index()), Some(2));
}

#[test]
fn test_takes_win() {
    assert_eq!(best_move(&board("OO./XX./..."), Player::O).map(|p| p.to_index()), Some(2));
}

#[test]
fn test_empty_board_center_for_either_player() {
    assert_eq!(best_move(&Board::new(), Player::X), Some(Position::Center));
    assert_eq!(best_move(&Board::new(), Player::O), Some(Position::Center));
}

#[test]
fn test_self_play_draws() {
    for first in [Player::X, Player::O] {
        let mut board = Board::new();
        let mut to_move = first;
        while !evaluate(&board).is_over() {
            let pos = best_move(&board, to_move).unwrap();
            board = board.place(pos, to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Draw, "final board:\n{}", board);
    }
}

#[test]
fn test_never_loses_as_first_player() {
    assert_never_loses(Board::new(), Player::X, Player::X);
}

#[test]
fn test_never_loses_as_second_player() {
    assert_never_loses(Board::new(), Player::X, Player::O);
}

#[test]
fn test_pruned_search_matches_plain_minimax() {
    let mut seen = HashSet::new();
    collect_positions(Board::new(), Player::X, &mut seen);
    let mut checked = 0;
    for (b, to_move) in seen {
        // Openings with fewer than two marks are slow for the unpruned reference.
        if b.empty_positions().count() > 7 {
            continue;
        }
        assert_eq!(best_move(&b, to_move), reference_move(&b, to_move), "board:\n{}", b);
        checked += 1;
    }
    assert!(checked > 1000);
}

#[test]
fn test_random_move_on_full_board() {
    assert_eq!(random_move(&board("XOX/XOO/OXX")), None);
}

#[test]
fn test_random_move_only_open() {
    let b = board("XOX/.O./..X");
    for _ in 0..100 {
        let pos = random_move(&b).unwrap();
        assert!(b.is_empty(pos));
    }
}
