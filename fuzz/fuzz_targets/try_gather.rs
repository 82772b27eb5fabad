#![no_main]

// Checks that validated gathers never panic, and succeed exactly when every selector read
// is inside the source.

use libfuzzer_sys::{arbitrary, fuzz_target};
use swizzle_mask::{gather, try_gather, PackedMask};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub mask: u8,
    pub source: [u16; 4],
}

fuzz_target!(|input: Input| {
    let mask = PackedMask::new(input.mask);
    let [x, y, z, w] = input.source;

    let from_2d: Result<[u16; 4], _> = try_gather(&[x, y], mask);
    let from_3d: Result<[u16; 3], _> = try_gather(&[x, y, z], mask);
    let from_4d: Result<[u16; 2], _> = try_gather(&[x, y, z, w], mask);

    assert_eq!(from_2d.is_ok(), mask.decode::<4>().iter().all(|a| a.index() < 2));
    assert_eq!(from_3d.is_ok(), mask.decode::<3>().iter().all(|a| a.index() < 3));

    // A 4 component source accepts every selector.
    let unchecked: [u16; 2] = gather(&input.source, mask);
    assert_eq!(from_4d, Ok(unchecked));

    if let Ok(result) = from_3d {
        for (slot, value) in result.iter().enumerate() {
            assert_eq!(*value, input.source[mask.decode_one(slot).index()]);
        }
    }
});
