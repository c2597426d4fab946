//! Repeated extraction runs accumulating into one store.

use crate::common::*;
use contract_keywords::{Error, KeywordStore};

const CONTRACTS: &str = "\
id,title
1,\"선반, NC\"
2,유압 프레스 선반
3
4,(주)한국 선반
";

#[test]
fn two_runs_accumulate_and_export_in_count_order() {
    let ws = TestWorkspace::new();
    let config = ws.config("has_headers = true\nstore_path = \"data/counts.json\"\n");
    let csv = ws.write("contracts.csv", CONTRACTS);

    for _ in 0..2 {
        let stats = ws.extract(&csv, 1, &config);
        assert_eq!(stats.titles, 3);
        assert_eq!(stats.rejected, 0);
    }

    assert!(ws.path().join("data").join("counts.json").exists());
    assert_eq!(
        ws.export(&config),
        "선반,6\nNC,2\n유압,2\n주,2\n프레스,2\n한국,2\n"
    );
}

#[test]
fn empty_input_leaves_empty_store() {
    let ws = TestWorkspace::new();
    let config = ws.config("");
    let csv = ws.write("contracts.csv", "");

    let stats = ws.extract(&csv, 0, &config);
    assert_eq!(stats.titles, 0);
    assert_eq!(ws.export(&config), "");
}

#[test]
fn open_store_blocks_a_second_run() {
    let ws = TestWorkspace::new();
    let config = ws.config("");
    let _held = KeywordStore::open(ws.store_path(&config)).unwrap();

    assert!(matches!(
        KeywordStore::open(ws.store_path(&config)),
        Err(Error::StoreLocked(_))
    ));
}
