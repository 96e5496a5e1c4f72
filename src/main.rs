mod args;
use crate::args::{Args, Commands, SubmitArgs};

use std::fs;

use clap::Parser;
use thiserror::Error;

use mythril_client::{
    api::{ApiClient, ApiClientError},
    bytecode::{Bytecode, BytecodeError},
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    Bytecode(#[from] BytecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Args { command: cmd } = Args::parse();

    match &cmd {
        Commands::Submit(args) => {
            let uuid = submit(args)?;
            println!("analysis job id: {uuid}");
        }
    }
    Ok(())
}

fn submit(args: &SubmitArgs) -> Result<String, CliError> {
    let bytecode = match &args.bytecode {
        Some(bytecode) => bytecode.clone(),
        // clap guarantees --file is present when the positional isn't
        None => {
            let path = args.file.as_ref().ok_or(BytecodeError::Empty)?;
            let raw = fs::read_to_string(path)?;
            Bytecode::new(raw.trim())?
        }
    };

    let client = ApiClient::new(args.url.clone(), args.api_key.clone())?;

    log::info!("Submitting bytecode for analysis to {}", client.base());

    client.submit_bytecode(&bytecode).map_err(CliError::from)
}
