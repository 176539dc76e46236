#![no_main]

use libfuzzer_sys::fuzz_target;

use jo_core::{stringify_float, stringify_int, FLOAT_BUF_LEN, INT_BUF_LEN};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);

    let int = i64::from_le_bytes(raw);
    let mut buf = [0u8; INT_BUF_LEN];
    let n = stringify_int(int, &mut buf);
    let parsed: i64 = std::str::from_utf8(&buf[..n]).unwrap().parse().unwrap();
    assert_eq!(parsed, int);

    let float = f64::from_le_bytes(raw);
    let mut buf = [0u8; FLOAT_BUF_LEN];
    let n = stringify_float(float, &mut buf);
    let parsed: f64 = std::str::from_utf8(&buf[..n]).unwrap().parse().unwrap();
    assert!(parsed.to_bits() == float.to_bits() || (parsed.is_nan() && float.is_nan()));
});
