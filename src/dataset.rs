//! Input fixtures: loading the JSON input files and generating them
//! deterministically.
//!
//! One file per input size, named `entrada_<size>.json`, holding a single
//! `"dados"` key with the integers to sort:
//!
//! ```text
//! {"dados": [5, 3, 4, 1, 2]}
//! ```
//!
//! The benchmark pipeline only ever reads these files; the writers here
//! exist to seed an input directory ahead of a run and to back the tests.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One input document: the `"dados"` key and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "dados")]
    pub values: Vec<i64>,
}

/// File name convention for an input of `size` elements.
pub fn input_file_name(size: usize) -> String {
    format!("entrada_{size}.json")
}

pub fn input_path(dir: &Path, size: usize) -> PathBuf {
    dir.join(input_file_name(size))
}

/// Load the numeric sequence from an input file.
///
/// A missing file surfaces as `ErrorKind::NotFound` from `File::open`; a
/// malformed document or an absent `"dados"` key as `ErrorKind::InvalidData`.
pub fn load_input(path: &Path) -> io::Result<Vec<i64>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let record: InputRecord = serde_json::from_reader(reader)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(record.values)
}

fn per_size_seed(master_seed: u64, size: usize) -> u64 {
    master_seed
        .wrapping_add(size as u64)
        .wrapping_mul(0x517cc1b727220a95)
}

/// Write one fixture into `dir`: the integers `0..size` shuffled by a ChaCha8
/// stream derived from `master_seed` and the size, so every size gets an
/// independent but reproducible permutation. Returns the written path.
pub fn write_input_file(dir: &Path, size: usize, master_seed: u64) -> io::Result<PathBuf> {
    let mut values: Vec<i64> = (0..size as i64).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(per_size_seed(master_seed, size));
    values.shuffle(&mut rng);

    let path = input_path(dir, size);
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &InputRecord { values }).map_err(io::Error::other)?;
    writer.flush()?;
    Ok(path)
}

/// Populate `dir` (created if absent) with one fixture per size.
pub fn write_input_files(dir: &Path, sizes: &[usize], master_seed: u64) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    sizes
        .iter()
        .map(|&size| write_input_file(dir, size, master_seed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_name_convention() {
        assert_eq!(input_file_name(5000), "entrada_5000.json");
        assert_eq!(
            input_path(Path::new("jsons"), 10),
            PathBuf::from("jsons/entrada_10.json")
        );
    }

    #[test]
    fn fixtures_round_trip_through_the_loader() {
        let dir = tempdir().unwrap();
        write_input_files(dir.path(), &[10, 100], 42).unwrap();

        let values = load_input(&input_path(dir.path(), 100)).unwrap();
        assert_eq!(values.len(), 100);

        // The fixture is a permutation of 0..size.
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_input_files(&a, &[50], 7).unwrap();
        write_input_files(&b, &[50], 7).unwrap();

        let first = fs::read(input_path(&a, 50)).unwrap();
        let second = fs::read(input_path(&b, 50)).unwrap();
        assert_eq!(first, second);

        let c = dir.path().join("c");
        write_input_files(&c, &[50], 8).unwrap();
        let other_seed = fs::read(input_path(&c, 50)).unwrap();
        assert_ne!(first, other_seed);
    }

    #[test]
    fn sizes_get_distinct_permutations() {
        let dir = tempdir().unwrap();
        write_input_files(dir.path(), &[30, 40], 42).unwrap();

        let thirty = load_input(&input_path(dir.path(), 30)).unwrap();
        let forty = load_input(&input_path(dir.path(), 40)).unwrap();
        // The shorter fixture is not a prefix of the longer one.
        assert_ne!(thirty[..], forty[..30]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_input(&input_path(dir.path(), 10)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn malformed_document_is_invalid_data() {
        let dir = tempdir().unwrap();

        let garbled = dir.path().join("entrada_10.json");
        fs::write(&garbled, "not json at all").unwrap();
        let err = load_input(&garbled).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let wrong_key = dir.path().join("entrada_20.json");
        fs::write(&wrong_key, r#"{"numeros": [1, 2, 3]}"#).unwrap();
        let err = load_input(&wrong_key).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
