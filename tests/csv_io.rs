use std::fs;

use thermoqc::io::csv::{read_table, write_table};
use thermoqc::table::RawAssayTable;

#[test]
fn read_preserves_empty_fields_and_ragged_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plate.csv");
    fs::write(&path, "header,only\n30,,1.0,2.0,3.0\n35,x\n").unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.rows()[0], vec!["header", "only"]);
    assert_eq!(table.rows()[1], vec!["30", "", "1.0", "2.0", "3.0"]);
    assert_eq!(table.rows()[2], vec!["35", "x"]);
}

#[test]
fn write_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let table = RawAssayTable::from_rows(vec![
        vec!["a".to_string(), "b,with comma".to_string()],
        vec!["30".to_string(), String::new(), "1.0".to_string()],
        vec!["35".to_string(), "".to_string(), "".to_string(), "2.5".to_string()],
    ]);
    write_table(&path, &table).unwrap();
    let back = read_table(&path).unwrap();
    assert_eq!(back, table);
}
