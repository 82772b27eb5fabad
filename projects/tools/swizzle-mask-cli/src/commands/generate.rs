use crate::error::CliError;
use argh::FromArgs;
use std::fs;
use std::path::PathBuf;
use swizzle_mask::table::codegen::{RustSource, DEFAULT_CRATE_PATH};
use swizzle_mask::{tables, Dimension, DimensionPair};

#[derive(FromArgs, Debug)]
/// Emit the named mask tables as Rust constants
#[argh(subcommand, name = "generate")]
pub struct GenerateCmd {
    /// source dimension: 2, 3 or 4 [default: all pairs]
    #[argh(option)]
    pub source: Option<Dimension>,

    /// target dimension: 2, 3 or 4 [default: all pairs]
    #[argh(option)]
    pub target: Option<Dimension>,

    /// file to write the source to [default: stdout]
    #[argh(option)]
    pub output: Option<PathBuf>,

    /// path the generated code imports PairMask from [default: swizzle_mask]
    #[argh(option, default = "String::from(DEFAULT_CRATE_PATH)")]
    pub crate_path: String,
}

pub fn handle_generate_command(cmd: GenerateCmd) -> Result<(), CliError> {
    let source = render_source(&cmd)?;

    match &cmd.output {
        Some(path) => {
            fs::write(path, &source)?;
            println!(
                "Wrote {} constants to {}",
                count_constants(&source),
                path.display()
            );
        }
        None => print!("{source}"),
    }

    Ok(())
}

/// Renders the requested tables.
pub fn render_source(cmd: &GenerateCmd) -> Result<String, CliError> {
    let tables = tables();
    let source = match (cmd.source, cmd.target) {
        (Some(source), Some(target)) => {
            let table = tables.get(DimensionPair::new(source, target));
            RustSource::single(table).with_crate_path(&cmd.crate_path)
        }
        (None, None) => RustSource::all(tables).with_crate_path(&cmd.crate_path),
        _ => return Err(CliError::IncompletePair),
    };

    Ok(source.to_string())
}

fn count_constants(source: &str) -> usize {
    source
        .lines()
        .filter(|line| line.trim_start().starts_with("pub const "))
        .count()
}
