use crate::error::CliError;
use crate::util::format_mask;
use argh::FromArgs;
use swizzle_mask::{tables, Dimension, DimensionPair, NamedMaskTable};

#[derive(FromArgs, Debug)]
/// Print every named mask of a dimension pair
#[argh(subcommand, name = "list")]
pub struct ListCmd {
    /// source dimension: 2, 3 or 4
    #[argh(option)]
    pub source: Dimension,

    /// target dimension: 2, 3 or 4
    #[argh(option)]
    pub target: Dimension,
}

pub fn handle_list_command(cmd: ListCmd) -> Result<(), CliError> {
    let table = tables().get(DimensionPair::new(cmd.source, cmd.target));

    println!("=== {} ({} masks) ===", table.pair(), table.len());
    for line in format_table(table) {
        println!("{line}");
    }

    Ok(())
}

/// One `NAME = mask` line per entry, in generation order.
pub fn format_table(table: &NamedMaskTable) -> Vec<String> {
    table
        .iter()
        .map(|entry| format!("{:<4} = {}", entry.name, format_mask(entry.mask)))
        .collect()
}
