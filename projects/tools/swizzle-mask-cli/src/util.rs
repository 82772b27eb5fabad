use swizzle_mask::PackedMask;

/// Parses a mask byte given on the command line.
///
/// Accepts decimal (`36`), hexadecimal (`0x24`) and binary (`0b100100`) notation.
/// Underscores are ignored, so `0b10_01_00` is also valid.
pub fn parse_mask_byte(value: &str) -> Result<u8, String> {
    let cleaned: String = value.trim().chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u8::from_str_radix(bin, 2)
    } else {
        lower.parse::<u8>()
    };

    parsed.map_err(|e| format!("Invalid mask '{value}': {e}. Expected a byte (0-255, 0x00-0xFF or 0b...)."))
}

/// Formats a mask as `0xHH (ddd, 0bbbbbbbbb)`.
pub fn format_mask(mask: PackedMask) -> String {
    format!("{mask} ({:>3}, 0b{:08b})", mask.raw(), mask.raw())
}
