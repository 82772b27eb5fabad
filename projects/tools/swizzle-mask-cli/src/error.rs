use std::io;
use swizzle_mask::{DimensionPair, SwizzleError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Swizzle(#[from] SwizzleError),
    #[error("--source and --target must be given together")]
    IncompletePair,
    #[error("No mask named '{name}' in the {pair} table")]
    UnknownName { name: String, pair: DimensionPair },
}
