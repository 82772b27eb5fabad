#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Generate and inspect bit-packed swizzle masks
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Generate(commands::generate::GenerateCmd),
    List(commands::list::ListCmd),
    Encode(commands::encode::EncodeCmd),
    Decode(commands::decode::DecodeCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Generate(cmd) => {
            commands::generate::handle_generate_command(cmd)?;
        }
        Commands::List(cmd) => {
            commands::list::handle_list_command(cmd)?;
        }
        Commands::Encode(cmd) => {
            commands::encode::handle_encode_command(cmd)?;
        }
        Commands::Decode(cmd) => {
            commands::decode::handle_decode_command(cmd)?;
        }
    }

    Ok(())
}
