#![no_main]

use libfuzzer_sys::fuzz_target;

use jo_core::{JoStr, Ownership};
use jo_memory::{resize, take};

fuzz_target!(|data: &[u8]| {
    let src = JoStr::from_bytes(data);
    let mut owned = JoStr::copy_of(&src).unwrap();
    assert_eq!(owned.as_bytes(), data);

    let alias = JoStr::alias_of(&owned);
    assert_eq!(alias.as_ptr(), owned.as_ptr());
    drop(alias);

    let moved = JoStr::take_from(&mut owned);
    assert_eq!(owned.ownership(), Ownership::Empty);
    assert_eq!(moved.as_bytes(), data);

    // Shrink a copy of the input to its first half and check the prefix.
    let mut slot = jo_memory::allocate(data.len());
    if let Some(buf) = slot.as_mut() {
        buf.as_mut_slice().copy_from_slice(data);
    }
    let half = data.len() / 2;
    let shrunk = resize(&mut slot, half).unwrap();
    assert!(take(&mut slot).is_none());
    assert_eq!(shrunk.as_slice(), &data[..half]);
});
