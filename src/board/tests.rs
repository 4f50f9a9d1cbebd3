use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_numbers() {
    assert_eq!(Player::One.index(), 0);
    assert_eq!(Player::Two.index(), 1);
    assert_eq!(Player::One.number(), 1);
    assert_eq!(Player::Two.number(), 2);
}

#[test]
fn test_direction_opposite() {
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
}

#[test]
fn test_initial_layout() {
    let board = Board::new(4);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 10);
    for row in 0..4 {
        let cells = board.row(row);
        assert!(cells[..3].iter().all(|c| c.is_sentinel()));
        assert!(cells[3..7].iter().all(|&c| c == Cell::Empty));
        assert!(cells[7..].iter().all(|c| c.is_sentinel()));
    }
}

#[test]
fn test_initial_layout_size_five() {
    let board = Board::new(5);
    assert_eq!(board.cols(), 13);
    let empties = board.row(2).iter().filter(|&&c| c == Cell::Empty).count();
    assert_eq!(empties, 5);
}

#[test]
fn test_place_marks_cell() {
    let mut board = Board::new(4);
    board.place(Pos::new(1, 4), Player::Two);
    assert_eq!(board.get(Pos::new(1, 4)), Cell::Owned(Player::Two));
    assert_eq!(board.count_owned(Player::Two), 1);
    assert_eq!(board.count_owned(Player::One), 0);
}

#[test]
fn test_shift_is_rotation() {
    let mut board = Board::new(4);
    board.place(Pos::new(0, 3), Player::One);
    board.shift_row(0, Direction::Right);
    assert_eq!(board.get(Pos::new(0, 4)), Cell::Owned(Player::One));
    assert_eq!(board.get(Pos::new(0, 3)), Cell::Sentinel);
    assert_eq!(board.get(Pos::new(0, 7)), Cell::Empty);

    board.shift_row(0, Direction::Left);
    board.shift_row(0, Direction::Left);
    assert_eq!(board.get(Pos::new(0, 2)), Cell::Owned(Player::One));
    assert_eq!(board.get(Pos::new(0, 6)), Cell::Sentinel);
}

#[test]
fn test_shift_then_inverse_restores_board() {
    let mut board = Board::new(4);
    board.place(Pos::new(2, 5), Player::One);
    board.place(Pos::new(2, 6), Player::Two);
    let original = board.clone();

    board.apply(Move::shift(2, Direction::Left), Player::One);
    assert_ne!(board, original);
    board.apply(Move::shift(2, Direction::Right), Player::Two);
    assert_eq!(board, original);
}

#[test]
fn test_shift_preserves_cell_counts() {
    let mut board = Board::new(4);
    board.place(Pos::new(3, 3), Player::One);
    for _ in 0..7 {
        board.shift_row(3, Direction::Right);
    }
    let sentinels = board.row(3).iter().filter(|c| c.is_sentinel()).count();
    assert_eq!(sentinels, 6);
    assert_eq!(board.count_owned(Player::One), 1);
}

#[test]
fn test_with_move_leaves_original() {
    let board = Board::new(4);
    let next = board.with_move(Move::place(0, 3), Player::One);
    assert_eq!(board.get(Pos::new(0, 3)), Cell::Empty);
    assert_eq!(next.get(Pos::new(0, 3)), Cell::Owned(Player::One));
}

#[test]
fn test_parse_and_display() {
    let rows = ["###1..2###", "###....###", "##....####", "###....###"];
    let board = Board::parse(&rows).unwrap();
    assert_eq!(board.get(Pos::new(0, 3)), Cell::Owned(Player::One));
    assert_eq!(board.get(Pos::new(0, 6)), Cell::Owned(Player::Two));
    assert_eq!(board.get(Pos::new(2, 2)), Cell::Empty);
    assert_eq!(board.to_string(), rows.join("\n") + "\n");
}

#[test]
fn test_parse_rejects_bad_width() {
    assert!(Board::parse(&["###..###", "###..###"]).is_none());
    assert!(Board::parse(&["#..#", "x..#"]).is_none());
    assert!(Board::parse(&[]).is_none());
}

#[test]
fn test_vacated_edge() {
    let board = Board::parse(&["...#", "#..."]).unwrap();
    assert_eq!(board.vacated_edge(0, Direction::Right), Cell::Sentinel);
    assert_eq!(board.vacated_edge(0, Direction::Left), Cell::Empty);
    assert_eq!(board.vacated_edge(1, Direction::Left), Cell::Sentinel);
    assert_eq!(board.vacated_edge(1, Direction::Right), Cell::Empty);
}

#[test]
fn test_move_inverse() {
    let left = Move::shift(1, Direction::Left);
    let right = Move::shift(1, Direction::Right);
    assert!(left.is_inverse_of(right));
    assert!(right.is_inverse_of(left));
    assert!(!left.is_inverse_of(left));
    assert!(!left.is_inverse_of(Move::shift(2, Direction::Right)));
    assert!(!Move::place(1, 3).is_inverse_of(right));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 9) < Pos::new(1, 0));
}

#[test]
fn test_deserialize_checks_shape() {
    let board = Board::new(3);
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

    let short = r#"{"size":4,"cells":["Empty","Empty","Empty"]}"#;
    let err = serde_json::from_str::<Board>(short).unwrap_err();
    assert!(err.to_string().contains("cannot hold 3 cells"));

    assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).is_err());
}
