//! Property-based tests for the heap primitives and bundles.

use proptest::prelude::*;

use jo_memory::{allocate, resize, take, Bundle, Flags, OwnedBuf};

fn patterned(size: usize, seed: u8) -> Option<OwnedBuf> {
    let mut handle = allocate(size);
    if let Some(buf) = handle.as_mut() {
        for (i, byte) in buf.as_mut_slice().iter_mut().enumerate() {
            *byte = seed.wrapping_add(i as u8);
        }
    }
    handle
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Resizing keeps the first `min(old, new)` bytes, zero-fills the rest,
    /// and always clears the caller's slot.
    #[test]
    fn resize_keeps_common_prefix(old in 0usize..2048, new in 0usize..2048, seed in any::<u8>()) {
        let mut slot = patterned(old, seed);
        let before = slot.as_ref().unwrap().as_slice().to_vec();

        let resized = resize(&mut slot, new).unwrap();
        prop_assert!(slot.is_none());
        prop_assert_eq!(resized.len(), new);

        let kept = old.min(new);
        prop_assert_eq!(&resized.as_slice()[..kept], &before[..kept]);
        prop_assert!(resized.as_slice()[kept..].iter().all(|&b| b == 0));
    }

    /// Taking moves the buffer unchanged and leaves the slot empty.
    #[test]
    fn take_empties_slot(size in 0usize..1024, seed in any::<u8>()) {
        let mut slot = patterned(size, seed);
        let addr = slot.as_ref().unwrap().as_ptr();

        let moved = take(&mut slot).unwrap();
        prop_assert!(slot.is_none());
        prop_assert_eq!(moved.as_ptr(), addr);
        prop_assert_eq!(moved.len(), size);
        prop_assert!(take(&mut slot).is_none());
    }

    /// Elements written through a bundle survive growth by `resize`.
    #[test]
    fn bundle_elements_survive_growth(
        values in proptest::collection::vec(any::<u32>(), 1..64),
        extra in 1usize..32,
    ) {
        let n = values.len();
        let elem = Bundle::<u32>::elem_size();
        let mut bundle = Bundle::<u32>::from_parts(allocate(n * elem), n as u32, Flags::EMPTY);
        bundle.as_mut_slice().copy_from_slice(&values);

        let mut data = bundle.take_data();
        prop_assert!(bundle.data().is_none());
        let grown = resize(&mut data, (n + extra) * elem);
        let grown = Bundle::<u32>::from_parts(grown, (n + extra) as u32, Flags::EMPTY);

        prop_assert_eq!(&grown.as_slice()[..n], &values[..]);
        prop_assert!(grown.as_slice()[n..].iter().all(|&v| v == 0));
    }
}
