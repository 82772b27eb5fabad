#![no_main]

// Validates that every byte decodes to selectors which re-encode to the same bits, and that
// the name of a canonical mask is found in the generated table.

use libfuzzer_sys::fuzz_target;
use swizzle_mask::{tables, Dimension, DimensionPair, Mask2D, Mask3D, Mask4D, PackedMask};

fuzz_target!(|raw: u8| {
    let mask = PackedMask::new(raw);

    // Round trip through the builders; only the target slots survive.
    assert_eq!(Mask4D::from(mask).to_mask(), mask);
    assert_eq!(Mask3D::from(mask).to_mask().raw(), raw & 0x3F);
    assert_eq!(Mask2D::from(mask).to_mask().raw(), raw & 0x0F);

    for target in Dimension::all_values() {
        let canonical = PackedMask::new(raw & PackedMask::used_bits(*target));
        let name = canonical.name(*target);

        // Narrowest source that can read every selector.
        let widest = canonical
            .selectors(*target)
            .map(|axis| axis.index() + 1)
            .fold(2, usize::max);
        let source = Dimension::try_from(widest).unwrap();

        let table = tables().get(DimensionPair::new(source, *target));
        assert_eq!(table.get(&name), Some(canonical));
        assert_eq!(table.name_of(canonical), Some(name.as_str()));
    }
});
