//! Golden file integration tests.
//!
//! Reads tests/testdata/stringify_golden.json and verifies every stringify
//! function produces the recorded text, and that the text parses back.

use serde::Deserialize;

use jo_core::{
    stringify_bool, stringify_float, stringify_int, BOOL_BUF_LEN, FLOAT_BUF_LEN, INT_BUF_LEN,
};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    ints: Vec<GoldenEntry<i64>>,
    floats: Vec<GoldenEntry<f64>>,
    bools: Vec<GoldenEntry<bool>>,
}

#[derive(Deserialize)]
struct GoldenEntry<T> {
    value: T,
    text: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/stringify_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn text(buf: &[u8], n: usize) -> &str {
    std::str::from_utf8(&buf[..n]).expect("stringify output is ASCII")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_ints() {
    let data = load_golden_data();
    assert!(!data.ints.is_empty());
    for entry in &data.ints {
        let mut buf = [0u8; INT_BUF_LEN];
        let n = stringify_int(entry.value, &mut buf);
        assert_eq!(text(&buf, n), entry.text, "int {}", entry.value);
        assert_eq!(text(&buf, n).parse::<i64>().unwrap(), entry.value);
    }
}

#[test]
fn golden_floats() {
    let data = load_golden_data();
    assert!(!data.floats.is_empty());
    for entry in &data.floats {
        let mut buf = [0u8; FLOAT_BUF_LEN];
        let n = stringify_float(entry.value, &mut buf);
        assert_eq!(text(&buf, n), entry.text, "float {:e}", entry.value);
        assert_eq!(
            text(&buf, n).parse::<f64>().unwrap().to_bits(),
            entry.value.to_bits()
        );
    }
}

#[test]
fn golden_bools() {
    let data = load_golden_data();
    for entry in &data.bools {
        let mut buf = [0u8; BOOL_BUF_LEN];
        let n = stringify_bool(entry.value, &mut buf);
        assert_eq!(text(&buf, n), entry.text);
        assert_eq!(n, entry.text.len());
    }
}
