use crate::error::CliError;
use crate::util::{format_mask, parse_mask_byte};
use argh::FromArgs;
use swizzle_mask::{Axis, Dimension, PackedMask};

#[derive(FromArgs, Debug)]
/// Print the name and selectors stored in a mask byte
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// mask byte: decimal, 0x hex or 0b binary
    #[argh(option, from_str_fn(parse_mask_byte))]
    pub mask: u8,

    /// target dimension: 2, 3 or 4
    #[argh(option)]
    pub target: Dimension,

    /// source dimension to validate the selectors against
    #[argh(option)]
    pub source: Option<Dimension>,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    for line in describe_mask(PackedMask::new(cmd.mask), cmd.target, cmd.source)? {
        println!("{line}");
    }
    Ok(())
}

/// Describes `mask` read as a `target` component swizzle.
///
/// When `source` is given the selectors are validated against it first.
pub fn describe_mask(
    mask: PackedMask,
    target: Dimension,
    source: Option<Dimension>,
) -> Result<Vec<String>, CliError> {
    if let Some(source) = source {
        mask.check_selectors(source, target)?;
    }

    let mut lines = vec![
        format!("Mask:      {}", format_mask(mask)),
        format!("Name:      {}", mask.name(target)),
    ];

    let selectors: Vec<String> = mask
        .selectors(target)
        .enumerate()
        .map(|(slot, axis)| format!("{} <- {:?}", target_label(slot), axis))
        .collect();
    lines.push(format!("Selectors: {}", selectors.join(", ")));

    if !mask.is_canonical(target) {
        lines.push(format!(
            "Note:      bits above slot {} are set and ignored",
            target.len() - 1
        ));
    }

    Ok(lines)
}

fn target_label(slot: usize) -> char {
    Axis::from_bits(slot as u8).label().to_ascii_lowercase()
}
