use crate::error::CliError;
use crate::util::format_mask;
use argh::FromArgs;
use swizzle_mask::{parse_name, tables, Dimension, DimensionPair, PackedMask};

#[derive(FromArgs, Debug)]
/// Print the mask byte of a symbolic name such as XYX
#[argh(subcommand, name = "encode")]
pub struct EncodeCmd {
    /// mask name, one axis letter (X, Y, Z, W) per target component
    #[argh(positional)]
    pub name: String,

    /// source dimension: 2, 3 or 4 [default: 4]
    #[argh(option, default = "Dimension::Four")]
    pub source: Dimension,
}

pub fn handle_encode_command(cmd: EncodeCmd) -> Result<(), CliError> {
    let mask = encode_name(&cmd.name, cmd.source)?;
    println!("{} = {}", cmd.name.to_ascii_uppercase(), format_mask(mask));
    Ok(())
}

/// Looks `name` up in the table of (`source`, name length).
pub fn encode_name(name: &str, source: Dimension) -> Result<PackedMask, CliError> {
    let target = Dimension::try_from(name.chars().count())?;
    let pair = DimensionPair::new(source, target);

    match tables().get(pair).get(&name.to_ascii_uppercase()) {
        Some(mask) => Ok(mask),
        None => {
            // Not in the table; report why.
            parse_name(name, pair)?;
            Err(CliError::UnknownName {
                name: name.to_string(),
                pair,
            })
        }
    }
}
