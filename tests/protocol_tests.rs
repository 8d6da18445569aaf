use ox_client::{encode_move, parse_snapshot, Cell, CellIndex, Mark, SnapshotError};

#[test]
fn parse_initial_empty_snapshot() {
    let snap = parse_snapshot(",,,,,,,,,X,").unwrap();
    assert!(snap.cells.iter().all(|c| c.is_empty()));
    assert_eq!(snap.turn, Mark::X);
    assert_eq!(snap.message, "");
    assert!(!snap.is_terminal());
}

#[test]
fn parse_terminal_snapshot() {
    let snap = parse_snapshot("X,O,X,O,X,O,X,O,X,O,Player X Wins").unwrap();
    assert_eq!(snap.cells[0], Cell::Marked(Mark::X));
    assert_eq!(snap.cells[1], Cell::Marked(Mark::O));
    assert_eq!(snap.cells[8], Cell::Marked(Mark::X));
    assert!(snap.cells.iter().all(|c| !c.is_empty()));
    assert_eq!(snap.turn, Mark::O);
    assert_eq!(snap.message, "Player X Wins");
    assert!(snap.is_terminal());
}

#[test]
fn parse_mid_game_snapshot() {
    let snap = parse_snapshot("X,,O,,X,,,,,O,").unwrap();
    assert_eq!(snap.cells[0], Cell::Marked(Mark::X));
    assert_eq!(snap.cells[2], Cell::Marked(Mark::O));
    assert_eq!(snap.cells[4], Cell::Marked(Mark::X));
    assert!(snap.cells[1].is_empty());
    assert_eq!(snap.turn, Mark::O);
    assert!(!snap.is_terminal());
}

#[test]
fn parse_rejects_wrong_field_count() {
    assert_eq!(
        parse_snapshot("X,O,X").unwrap_err(),
        SnapshotError::FieldCount(3)
    );
    assert_eq!(
        parse_snapshot(",,,,,,,,,X,,extra").unwrap_err(),
        SnapshotError::FieldCount(12)
    );
    assert_eq!(parse_snapshot("").unwrap_err(), SnapshotError::FieldCount(1));
}

#[test]
fn parse_rejects_bad_cell_token() {
    let err = parse_snapshot("Z,,,,,,,,,X,").unwrap_err();
    assert_eq!(
        err,
        SnapshotError::BadCell {
            index: 0,
            token: "Z".to_string()
        }
    );
    // lowercase marks are not on the wire
    let err = parse_snapshot(",,,,x,,,,,X,").unwrap_err();
    assert!(matches!(err, SnapshotError::BadCell { index: 4, .. }));
}

#[test]
fn parse_rejects_bad_turn_token() {
    assert_eq!(
        parse_snapshot(",,,,,,,,,Q,").unwrap_err(),
        SnapshotError::BadTurn("Q".to_string())
    );
    assert_eq!(
        parse_snapshot(",,,,,,,,,,").unwrap_err(),
        SnapshotError::BadTurn("".to_string())
    );
}

#[test]
fn encode_move_is_single_ascii_digit() {
    for i in 0..=8u8 {
        let index = CellIndex::new(i).unwrap();
        let bytes = encode_move(index);
        assert_eq!(bytes, [b'0' + i]);
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), i.to_string());
    }
}

#[test]
fn cell_index_bounds() {
    assert!(CellIndex::new(8).is_ok());
    assert!(CellIndex::new(9).is_err());
    assert!(CellIndex::try_from(200u8).is_err());
}

#[test]
fn cell_index_coords_roundtrip() {
    for row in 0..3 {
        for col in 0..3 {
            let index = CellIndex::from_coords(row, col).unwrap();
            assert_eq!(index.as_usize(), row * 3 + col);
            assert_eq!(index.row(), row);
            assert_eq!(index.col(), col);
        }
    }
    assert!(CellIndex::from_coords(3, 0).is_err());
    assert!(CellIndex::from_coords(0, 3).is_err());
}
