use crate::*;
use lt_codec::{EncodedLevel, LevelEncoder, PassthroughCodec};
use lt_core::{LevelRecord, LumaError, TableConfig};
use tempfile::TempDir;

fn encoded(level: u8, values: &[u32]) -> EncodedLevel {
    let codec = PassthroughCodec;
    LevelEncoder::new(&codec).encode(&LevelRecord::from_sorted(level, values))
}

/// One color per level: level `l` holds only `l`.
fn write_tiny_table<S: TableStore + ?Sized>(store: &S, config: &TableConfig) -> CountIndex {
    let mut writer = TableWriter::new(store, config).unwrap();
    for level in 0..=255u8 {
        writer.write_level(&encoded(level, &[level as u32])).unwrap();
    }
    assert_eq!(writer.written(), 256);
    writer.finish().unwrap()
}

// ========== Stores ==========

#[test]
fn test_memory_store_crud() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.put("b", b"2").unwrap();
    store.put("a", b"1").unwrap();
    assert!(store.contains("a"));
    assert_eq!(store.get("b").unwrap(), b"2");
    assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
    assert!(matches!(store.get("zz"), Err(LumaError::Storage(_))));
}

#[test]
fn test_file_store_creates_root() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("nested").join("table");
    let store = FileStore::new(&root);
    store.prepare().unwrap();
    assert!(root.is_dir());
    store.put("7", &[1, 2, 3]).unwrap();
    assert!(store.contains("7"));
    assert!(!root.join("7.tmp").exists());
    assert_eq!(store.get("7").unwrap(), vec![1, 2, 3]);
    assert_eq!(store.keys().unwrap(), vec!["7"]);
}

#[test]
fn test_file_store_prepare_fails_on_file() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let store = FileStore::new(blocker.join("table"));
    assert!(matches!(store.prepare(), Err(LumaError::Storage(_))));
}

#[test]
fn test_file_store_put_without_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path().join("absent"));
    assert!(store.put("0", b"data").is_err());
}

// ========== Index ==========

#[test]
fn test_index_json_is_plain_array() {
    let index = CountIndex::new((0..256).collect()).unwrap();
    let json = String::from_utf8(index.to_json().unwrap()).unwrap();
    assert!(json.starts_with("[0,1,2,"));
    assert!(json.ends_with(",255]"));
    assert_eq!(CountIndex::from_json(json.as_bytes()).unwrap(), index);
    assert_eq!(index.get(10), 10);
    assert_eq!(index.total(), (0..256u64).sum::<u64>());
}

#[test]
fn test_index_wrong_length() {
    assert!(CountIndex::new(vec![1, 2, 3]).is_err());
    assert!(CountIndex::from_json(b"[1,2,3]").is_err());
    assert!(matches!(CountIndex::from_json(b"{}"), Err(LumaError::Serialization(_))));
}

// ========== Writer ==========

#[test]
fn test_writer_writes_levels_and_index() {
    let store = MemoryStore::new();
    let config = TableConfig::default();
    let index = write_tiny_table(&store, &config);
    assert_eq!(store.len(), 257);
    assert!(store.contains("0"));
    assert!(store.contains("255"));
    assert!(store.contains("index.json"));
    assert!(index.as_slice().iter().all(|&c| c == 1));
    let stored = CountIndex::from_json(&store.get("index.json").unwrap()).unwrap();
    assert_eq!(stored, index);
}

#[test]
fn test_writer_uses_extension() {
    let store = MemoryStore::new();
    let config = TableConfig { level_extension: Some("lz4".into()), ..TableConfig::default() };
    write_tiny_table(&store, &config);
    assert!(store.contains("42.lz4"));
    assert!(!store.contains("42"));
}

#[test]
fn test_writer_rejects_out_of_order() {
    let store = MemoryStore::new();
    let config = TableConfig::default();
    let mut writer = TableWriter::new(&store, &config).unwrap();
    writer.write_level(&encoded(0, &[0])).unwrap();
    let err = writer.write_level(&encoded(2, &[2])).unwrap_err();
    assert!(matches!(err, LumaError::InvalidLevel(2)));
}

#[test]
fn test_writer_finish_requires_all_levels() {
    let store = MemoryStore::new();
    let config = TableConfig::default();
    let mut writer = TableWriter::new(&store, &config).unwrap();
    writer.write_level(&encoded(0, &[0])).unwrap();
    let err = writer.finish().unwrap_err();
    assert!(matches!(err, LumaError::IncompleteTable { written: 1, expected: 256 }));
    assert!(err.to_string().contains("wrote 1 of 256 levels"));
    assert!(!store.contains("index.json"));
}

// ========== Reader ==========

#[test]
fn test_reader_tiny_table() {
    let store = MemoryStore::new();
    let config = TableConfig::default();
    write_tiny_table(&store, &config);
    let codec = PassthroughCodec;
    let reader = TableReader::open(&store, &codec, config).unwrap();
    assert_eq!(reader.count(9), 1);
    assert_eq!(reader.colors(9).unwrap(), vec![9]);
    assert!(reader.contains(9, 9).unwrap());
    assert!(!reader.contains(9, 10).unwrap());
    // Only 256 colors: not a full table.
    assert!(reader.verify().is_err());
}

#[test]
fn test_reader_detects_index_mismatch() {
    let store = MemoryStore::new();
    let config = TableConfig::default();
    write_tiny_table(&store, &config);
    let mut counts = vec![1u32; 256];
    counts[3] = 5;
    store.put("index.json", &CountIndex::new(counts).unwrap().to_json().unwrap()).unwrap();
    let codec = PassthroughCodec;
    let reader = TableReader::open(&store, &codec, config).unwrap();
    assert!(matches!(
        reader.record(3),
        Err(LumaError::IndexMismatch { level: 3, expected: 5, got: 1 })
    ));
}

#[test]
fn test_reader_rejects_corrupt_level() {
    let store = MemoryStore::new();
    let config = TableConfig::default();
    write_tiny_table(&store, &config);
    // count 1, one range of length 1 starting at u32::MAX
    let mut corrupt = vec![1, 0, 0, 0, 1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
    corrupt.resize(80, 0);
    store.put("4", &corrupt).unwrap();
    let codec = PassthroughCodec;
    let reader = TableReader::open(&store, &codec, config).unwrap();
    assert!(matches!(reader.colors(4), Err(LumaError::Layout(_))));
    assert!(matches!(reader.contains(4, 4), Err(LumaError::Layout(_))));
    assert_eq!(reader.colors(5).unwrap(), vec![5]);
}

#[test]
fn test_reader_missing_index() {
    let store = MemoryStore::new();
    let codec = PassthroughCodec;
    assert!(TableReader::open(&store, &codec, TableConfig::default()).is_err());
}
