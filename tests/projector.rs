use delimfile::{KeyValue, LineProjector, TypedProjector};

#[test]
fn projects_a_tab_delimited_line() {
    let projector = TypedProjector::<String, f64>::new();
    let entries = projector.project("a\t1\t2\t4", "\t").unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].value, Some(1.0));
    assert_eq!(entries[1].value, Some(2.0));
    assert_eq!(entries[2].value, Some(4.0));
    for entry in &entries {
        assert_eq!(entry.key, "a");
    }
}

#[test]
fn empty_cell_becomes_none() {
    let projector = TypedProjector::<String, f64>::new();
    let entries = projector.project("a\t\t2", "\t").unwrap();
    assert_eq!(entries[0].value, None);
    assert_eq!(entries[1].value, Some(2.0));
}

#[test]
fn start_index_defaults_to_one() {
    let projector = TypedProjector::<String, f64>::new();
    assert_eq!(projector.start_index(), 1);
}

#[test]
fn custom_start_index_skips_metadata_columns() {
    // columns 0 and 1 are metadata, data starts at 2
    let projector = TypedProjector::<String, f64>::with_start_index(2);
    let entries = projector.project("key\tannotation\t7\t8", "\t").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, Some(7.0));
    assert_eq!(entries[1].value, Some(8.0));
}

#[test]
fn bad_key_reports_column_zero() {
    let projector = TypedProjector::<f64, f64>::new();
    let err = projector.project("not-a-number\t1", "\t").unwrap_err();
    assert_eq!(err.column, 0);
    assert_eq!(err.token, "not-a-number");
}

#[test]
fn bad_value_reports_its_column_and_token() {
    let projector = TypedProjector::<String, f64>::new();
    let err = projector.project("a\t1\tbroken", "\t").unwrap_err();
    assert_eq!(err.column, 2);
    assert_eq!(err.token, "broken");
}

#[test]
fn project_error_promotes_to_a_parse_error() {
    let projector = TypedProjector::<String, f64>::new();
    let err = projector.project("a\tbad", "\t").unwrap_err().at_line(7);
    match err {
        delimfile::Error::Parse { line, column, token, .. } => {
            assert_eq!(line, 7);
            assert_eq!(column, 1);
            assert_eq!(token, "bad");
        }
        other => panic!("expected Parse, got {other}"),
    }
}

#[test]
fn key_value_renders_with_a_custom_delimiter() {
    let kv = KeyValue::new("gene", 0.5);
    assert_eq!(kv.to_delimited("\t"), "gene\t0.5");
    assert_eq!(kv.to_delimited("="), "gene=0.5");
}
