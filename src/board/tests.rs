use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start_board() -> Board {
    Board::from_rows(&[
        ". W B . W .",
        ". B . . B .",
        ". . W B . .",
        "B W B . . B",
        "W . B . . W",
        "W . B . W W",
    ])
    .unwrap()
}

#[test]
fn test_piece_opponent() {
    assert_eq!(Piece::Black.opponent(), Piece::White);
    assert_eq!(Piece::White.opponent(), Piece::Black);
    assert_eq!(Piece::Empty.opponent(), Piece::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 2);
    assert_eq!(pos.to_index(), 4 * 6 + 2);
    assert_eq!(Pos::from_index(26), pos);
    assert_eq!(Pos::from_index(TOTAL_CELLS - 1), Pos::new(5, 5));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 6));
}

#[test]
fn test_quadrants() {
    assert_eq!(Pos::new(0, 0).quadrant(), 0);
    assert_eq!(Pos::new(2, 3).quadrant(), 1);
    assert_eq!(Pos::new(3, 2).quadrant(), 2);
    assert_eq!(Pos::new(5, 5).quadrant(), 3);
    assert_eq!(quadrant_origin(0), (0, 0));
    assert_eq!(quadrant_origin(1), (0, 3));
    assert_eq!(quadrant_origin(2), (3, 0));
    assert_eq!(quadrant_origin(3), (3, 3));
    assert_eq!(Pos::new(4, 5).local(), (1, 2));
}

#[test]
fn test_direction_codes() {
    assert_eq!(Direction::from_code(0), Some(Direction::Clockwise));
    assert_eq!(Direction::from_code(1), Some(Direction::CounterClockwise));
    assert_eq!(Direction::from_code(2), None);
    for dir in Direction::ALL {
        assert_eq!(Direction::from_code(dir.code()), Some(dir));
    }
}

#[test]
fn test_display_start_board() {
    assert_eq!(
        start_board().to_string(),
        " . W B . W .\n . B . . B .\n . . W B . .\n B W B . . B\n W . B . . W\n W . B . W W\n"
    );
}

#[test]
fn test_display_round_trips_through_from_rows() {
    let board = start_board();
    let text = board.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(Board::from_rows(&rows), Some(board));
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert_eq!(Board::from_rows(&[". . . . . ."; 5]), None);
    assert_eq!(Board::from_rows(&[". . . . ."; 6]), None);

    let mut rows = [". . . . . ."; 6];
    rows[3] = ". . X . . .";
    assert_eq!(Board::from_rows(&rows), None);

    assert_eq!(Board::from_rows(&["......"; 6]), Some(Board::new()));
}

#[test]
fn test_rotate_quadrant_1_clockwise() {
    let mut board = start_board();
    board.rotate(1, Direction::Clockwise);
    assert_eq!(
        board.to_string(),
        " . W B B . .\n . B . . B W\n . . W . . .\n B W B . . B\n W . B . . W\n W . B . W W\n"
    );
}

#[test]
fn test_rotate_quadrant_2_counter_clockwise() {
    let mut board = start_board();
    board.rotate(2, Direction::CounterClockwise);
    assert_eq!(
        board.to_string(),
        " . W B . W .\n . B . . B .\n . . W B . .\n B B B . . B\n W . . . . W\n B W W . W W\n"
    );
}

#[test]
fn test_rotation_order_four() {
    let start = start_board();
    for quadrant in 0..NUM_QUADRANTS {
        for dir in Direction::ALL {
            let mut board = start;
            for turn in 1..=4 {
                board.rotate(quadrant, dir);
                assert_eq!(board == start, turn == 4, "quadrant {} {:?} turn {}", quadrant, dir, turn);
            }
        }
    }
}

#[test]
fn test_rotation_inverse() {
    let start = start_board();
    for quadrant in 0..NUM_QUADRANTS {
        let mut board = start;
        board.rotate(quadrant, Direction::Clockwise);
        board.rotate(quadrant, Direction::CounterClockwise);
        assert_eq!(board, start);

        let mut board = start;
        board.rotate(quadrant, Direction::CounterClockwise);
        board.rotate(quadrant, Direction::Clockwise);
        assert_eq!(board, start);
    }
}

#[test]
fn test_rotation_leaves_other_quadrants() {
    let start = start_board();
    let mut board = start;
    board.rotate(3, Direction::Clockwise);
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if pos.quadrant() != 3 {
            assert_eq!(board.get(pos), start.get(pos));
        }
    }
}

#[test]
fn test_rotation_keeps_centre() {
    let mut board = Board::new();
    for quadrant in 0..NUM_QUADRANTS {
        let (top, left) = quadrant_origin(quadrant);
        board.set(Pos::new(top + 1, left + 1), Piece::Black);
    }
    let before = board;
    for quadrant in 0..NUM_QUADRANTS {
        for dir in Direction::ALL {
            board.rotate(quadrant, dir);
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_rotated_cw_matches_rotate() {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let mut board = Board::new();
        board.set(pos, Piece::White);
        board.rotate(pos.quadrant(), Direction::Clockwise);
        assert_eq!(board.get(pos.rotated_cw()), Piece::White, "{:?}", pos);
        assert_eq!(board.piece_count(), 1);
    }
}

#[test]
fn test_place_is_exclusive() {
    let mut board = start_board();
    let before = board;
    assert!(!board.place(Pos::new(0, 1), Piece::Black));
    assert_eq!(board, before);

    let mv = Move::new(Pos::new(0, 2), 3, Direction::Clockwise);
    assert!(!board.apply_move(mv, Piece::White));
    assert_eq!(board, before);

    assert!(board.place(Pos::new(0, 0), Piece::Black));
    assert_eq!(board.get(Pos::new(0, 0)), Piece::Black);
}

#[test]
fn test_apply_move_rotating_different_quadrant() {
    let mut board = start_board();
    let mv = Move::new(Pos::new(2, 1), 2, Direction::CounterClockwise);
    assert!(board.apply_move(mv, Piece::White));
    assert_eq!(
        board.to_string(),
        " . W B . W .\n . B . . B .\n . W W B . .\n B B B . . B\n W . . . . W\n B W W . W W\n"
    );
}

#[test]
fn test_valid_moves_count_and_order() {
    let board = Board::new();
    let moves = board.valid_moves();
    assert_eq!(moves.len(), TOTAL_CELLS * 8);
    assert_eq!(moves[0], Move::new(Pos::new(0, 0), 0, Direction::Clockwise));
    assert_eq!(moves[1], Move::new(Pos::new(0, 0), 0, Direction::CounterClockwise));
    assert_eq!(moves[2], Move::new(Pos::new(0, 0), 1, Direction::Clockwise));
    assert_eq!(moves[8].pos, Pos::new(0, 1));

    let board = start_board();
    assert_eq!(board.valid_moves().len(), board.empty_count() * 8);
    assert!(board.valid_moves().iter().all(|mv| mv.is_valid(&board)));
}

#[test]
fn test_counts() {
    let board = start_board();
    assert_eq!(board.piece_count(), 18);
    assert_eq!(board.empty_count(), 18);
    assert!(!board.is_full());
    assert!(!board.is_board_empty());
    assert!(Board::new().is_board_empty());
}

#[test]
fn test_random_move_is_legal() {
    let board = start_board();
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..32 {
        let mv = board.random_move_with(&mut rng).unwrap();
        assert!(mv.is_valid(&board));
    }
    assert!(board.random_move().is_some());
}

#[test]
fn test_full_board_has_no_moves() {
    let board = Board::from_rows(&[
        "B B W W B B",
        "W W B B W W",
        "B B W W B B",
        "W W B B W W",
        "B B W W B B",
        "W W B B W W",
    ])
    .unwrap();
    assert!(board.is_full());
    assert!(board.valid_moves().is_empty());
    assert_eq!(board.random_move(), None);
    assert_eq!(board.best_move(Piece::Black), None);
}

#[test]
fn test_best_move_on_nearly_full_board() {
    let mut board = Board::from_rows(&[
        "B B W W B B",
        "W W B B W W",
        "B B W W B B",
        "W W B B W W",
        "B B W W B B",
        "W W B B W W",
    ])
    .unwrap();
    board.set(Pos::new(0, 2), Piece::Empty);
    board.set(Pos::new(5, 3), Piece::Empty);
    let mv = board.best_move(Piece::White).unwrap();
    assert!(mv.pos == Pos::new(0, 2) || mv.pos == Pos::new(5, 3));
}
