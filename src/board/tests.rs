use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::X.opponent(), Stone::O);
    assert_eq!(Stone::O.opponent(), Stone::X);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_codes() {
    assert_eq!(Stone::Empty.code(), 0);
    assert_eq!(Stone::X.code(), 1);
    assert_eq!(Stone::O.code(), 2);
    assert_eq!(Stone::from_code(1), Some(Stone::X));
    assert_eq!(Stone::from_code(2), Some(Stone::O));
    assert_eq!(Stone::from_code(3), None);
    assert_eq!(Stone::from_code(-1), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 2); // Center
    assert_eq!(pos.to_index(5), 12);

    let pos2 = Pos::from_index(12, 5);
    assert_eq!(pos2, pos);
    assert_eq!(Pos::from_index(24, 5), Pos::new(4, 4));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 5));
    assert!(Pos::is_valid(4, 4, 5));
    assert!(!Pos::is_valid(-1, 0, 5));
    assert!(!Pos::is_valid(0, -1, 5));
    assert!(!Pos::is_valid(5, 0, 5));
    assert!(!Pos::is_valid(0, 5, 5));
}

#[test]
fn test_board_constants() {
    assert_eq!(DEFAULT_BOARD_SIZE, 5);
    assert_eq!(DEFAULT_TOTAL_CELLS, 25);
    assert_eq!(Board::new().len(), 25);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_cell_at_matches_row_major_index() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 1), Stone::O);
    assert_eq!(board.cell_at(3, 1), Stone::O);
    assert_eq!(board.get_index(16), Stone::O);
    assert_eq!(board.index_of(Pos::new(3, 1)), 16);
    assert_eq!(board.pos_of(16), Pos::new(3, 1));
}

#[test]
fn test_from_codes_rejects_bad_input() {
    assert!(Board::from_codes(5, &[0; 24]).is_err());
    let mut codes = [0i64; 25];
    codes[7] = 3;
    assert!(Board::from_codes(5, &codes).is_err());
    codes[7] = 2;
    let board = Board::from_codes(5, &codes).unwrap();
    assert_eq!(board.get_index(7), Stone::O);
    assert_eq!(board.codes()[7], 2);
}

#[test]
fn test_with_stone_restores_cell() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::X);
    let before = board.clone();

    let seen = board.with_stone(6, Stone::O, |b| b.get_index(6));
    assert_eq!(seen, Stone::O);
    assert_eq!(board, before);
}

#[test]
fn test_counts_and_empties() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    board.place_stone(Pos::new(0, 0), Stone::X);
    board.place_stone(Pos::new(0, 1), Stone::O);
    board.place_stone(Pos::new(4, 4), Stone::X);

    assert_eq!(board.count(Stone::X), 2);
    assert_eq!(board.count(Stone::O), 1);
    assert_eq!(board.stone_count(), 3);
    assert_eq!(board.empty_indices().next(), Some(2));
    assert_eq!(board.empty_indices().count(), 22);
    assert!(!board.is_full());

    board.remove_stone(Pos::new(4, 4));
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_display_layout() {
    let mut board = Board::with_size(3);
    board.place_stone(Pos::new(0, 0), Stone::X);
    board.place_stone(Pos::new(1, 1), Stone::O);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " X |   |  ");
    assert_eq!(lines[1], "---+---+---");
    assert_eq!(lines[2], "   | O |  ");
    assert_eq!(lines.len(), 5);
}
