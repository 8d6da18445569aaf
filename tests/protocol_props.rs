use ox_client::{encode_move, parse_snapshot, CellIndex, GameView, SnapshotDecoder};
use proptest::prelude::*;

fn cell_token() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("X"), Just("O")]
}

fn turn_token() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("X"), Just("O")]
}

/// Result text as the server sends it: free text without field or frame
/// separators.
fn message_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 !]{0,30}"
}

prop_compose! {
    fn snapshot_text()(
        cells in prop::collection::vec(cell_token(), 9),
        turn in turn_token(),
        message in message_text(),
    ) -> String {
        let mut fields: Vec<&str> = cells;
        fields.push(turn);
        fields.push(&message);
        let text = fields.join(",");
        text
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_snapshots_always_parse(text in snapshot_text()) {
        let snap = parse_snapshot(&text).unwrap();
        let fields: Vec<&str> = text.split(',').collect();
        for (i, cell) in snap.cells.iter().enumerate() {
            prop_assert_eq!(cell.as_str(), fields[i]);
        }
        prop_assert_eq!(snap.turn.as_str(), fields[9]);
        prop_assert_eq!(snap.message.as_str(), fields[10]);
        prop_assert_eq!(snap.is_terminal(), !fields[10].is_empty());
    }

    #[test]
    fn applying_a_snapshot_twice_is_idempotent(text in snapshot_text()) {
        let snap = parse_snapshot(&text).unwrap();
        let mut view = GameView::new();
        view.connected();
        view.apply(&snap);
        let once = view.clone();
        view.apply(&snap);
        prop_assert_eq!(view, once);
    }

    #[test]
    fn framed_stream_decodes_every_snapshot(texts in prop::collection::vec(snapshot_text(), 1..5)) {
        let mut wire = String::new();
        for text in &texts {
            wire.push_str(text);
            wire.push('\n');
        }
        let mut decoder = SnapshotDecoder::new();
        let out = decoder.feed(wire.as_bytes());
        prop_assert_eq!(out.len(), texts.len());
        for (decoded, text) in out.iter().zip(&texts) {
            let direct = parse_snapshot(text).unwrap();
            prop_assert_eq!(decoded.as_ref().unwrap(), &direct);
        }
        prop_assert_eq!(decoder.pending(), 0);
    }

    #[test]
    fn framed_stream_survives_arbitrary_chunking(
        text in snapshot_text(),
        // Keep the cut short of ten bytes: a longer prefix can already
        // contain eleven fields, which the unframed fallback takes as a
        // whole message.
        cut in 0usize..10,
    ) {
        let mut wire = text.clone().into_bytes();
        wire.push(b'\n');
        let cut = cut.min(wire.len());
        let mut decoder = SnapshotDecoder::new();
        let mut out = decoder.feed(&wire[..cut]);
        out.extend(decoder.feed(&wire[cut..]));
        let direct = parse_snapshot(&text).unwrap();
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].as_ref().unwrap(), &direct);
    }

    #[test]
    fn every_cell_index_encodes_as_its_decimal_digit(i in 0u8..9) {
        let index = CellIndex::new(i).unwrap();
        let bytes = encode_move(index);
        let expected = i.to_string();
        prop_assert_eq!(&bytes[..], expected.as_bytes());
    }
}
