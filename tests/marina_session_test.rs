use marina::core::codec::{decode_record, encode_record};
use marina::core::store::DEFAULT_CAPACITY;
use marina::{LocalStorage, MarinaError, Repository, Shell, Store};
use rust_decimal_macros::dec;
use std::io::Cursor;
use tempfile::TempDir;

fn write_data_file(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join("BoatData.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_session_loads_edits_and_saves() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_data_file(
        &temp_dir,
        "Zeta,40,storage,9,0.00\nAnna,25,slip,12,500.00\nBeth,30,land,B,250.00\n",
    );

    let repository = Repository::new(LocalStorage::new(&path));
    let (mut store, report) = repository.open(DEFAULT_CAPACITY);
    assert!(report.is_clean());
    assert_eq!(store.len(), 3);

    let input = "add Cara,18,trailor,TX42,0\npayment anna 500\nremove zeta\nmonth\ninventory\nexit\n";
    let mut shell = Shell::new(Cursor::new(input), Vec::new());
    shell.run(&mut store).unwrap();
    let output = String::from_utf8(shell.into_output()).unwrap();

    let anna = output.find("Anna ").unwrap();
    let beth = output.find("Beth ").unwrap();
    let cara = output.find("Cara ").unwrap();
    assert!(anna < beth && beth < cara);
    assert!(!output.contains("Zeta "));

    repository.persist(&store).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        saved,
        "Anna,25.00,slip,12,312.50\nBeth,30.00,land,B,670.00\nCara,18.00,trailor,TX42,450.00\n"
    );
}

#[test]
fn test_saved_file_reloads_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_data_file(
        &temp_dir,
        "Sea Breeze,32.5,slip,4,10.10\nDry Dock,21,land,Q,0\nHauler,16,trailor,HX9,99.99\nWinter,45,storage,2,1234.56\n",
    );

    let repository = Repository::new(LocalStorage::new(&path));
    let (first, _) = repository.open(DEFAULT_CAPACITY);
    repository.persist(&first).unwrap();
    let (second, report) = repository.open(DEFAULT_CAPACITY);

    assert!(report.is_clean());
    let first: Vec<_> = first.iter().cloned().collect();
    let second: Vec<_> = second.iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn test_bad_line_does_not_abort_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_data_file(&temp_dir, "Cara,20,boat,X,0.00\nDana,22,storage,4,10.00\n");

    let (store, report) = Repository::new(LocalStorage::new(&path)).open(DEFAULT_CAPACITY);
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_name("dana").unwrap().amount_owed, dec!(10.00));
    assert!(matches!(
        report.skipped[0].error,
        MarinaError::UnknownLocationKind { .. }
    ));
}

#[test]
fn test_line_that_is_not_utf8_keeps_the_rest_on_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("BoatData.csv");
    std::fs::write(
        &path,
        b"Anna,25,slip,12,500.00\nBeth,30,land,B,250.00\nJos\xe9,20,slip,3,1.00\n",
    )
    .unwrap();

    let repository = Repository::new(LocalStorage::new(&path));
    let (store, report) = repository.open(DEFAULT_CAPACITY);
    assert!(report.source_error.is_none());
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_number, 3);

    repository.persist(&store).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Anna,25.00,slip,12,500.00\nBeth,30.00,land,B,250.00\n"
    );
}

#[test]
fn test_missing_file_starts_empty_and_save_creates_it() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("new").join("boats.csv");
    let repository = Repository::new(LocalStorage::new(&path));

    let (mut store, report) = repository.open(5);
    assert!(store.is_empty());
    assert!(report.source_error.is_some());

    store
        .add(decode_record("Anna,25,slip,12,500.00").unwrap())
        .unwrap();
    repository.persist(&store).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Anna,25.00,slip,12,500.00\n"
    );
}

#[test]
fn test_capacity_from_repository_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_data_file(&temp_dir, "A,10,slip,1,0\nB,10,slip,2,0\nC,10,slip,3,0\n");

    let (mut store, report) = Repository::new(LocalStorage::new(&path)).open(2);
    assert_eq!(store.len(), 2);
    assert_eq!(report.ignored_over_capacity, 1);

    let record = decode_record("D,10,slip,4,0").unwrap();
    assert!(matches!(
        store.add(record).unwrap_err(),
        MarinaError::StoreFull { capacity: 2 }
    ));
    assert_eq!(
        store.serialize_all(),
        vec!["A,10.00,slip,1,0.00\n", "B,10.00,slip,2,0.00\n"]
    );
}

#[test]
fn test_encode_decode_through_store() {
    let (store, _) = Store::load(DEFAULT_CAPACITY, ["Anna,25,slip,12,500.00"]);
    let anna = store.find_by_name("ANNA").unwrap();
    assert_eq!(&decode_record(&encode_record(anna)).unwrap(), anna);
}
