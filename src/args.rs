use std::path::PathBuf;

use reqwest::Url;

use mythril_client::api::DEFAULT_API_URL;
use mythril_client::bytecode::Bytecode;

fn bytecode_value_parser(raw: &str) -> Result<Bytecode, String> {
    Bytecode::new(raw).map_err(|err| err.to_string())
}

#[derive(clap::Parser)]
#[command(name = "mythril")]
#[command(author = "ConsenSys")]
#[command(version)]
#[command(about = "Submit smart contract bytecode for Mythril security analysis")]
#[command(long_about = "
A command-line tool for submitting compiled smart contract bytecode to the
Mythril security analysis API.

The tool performs a single submission and prints the analysis job id assigned
by the service. It targets the hosted API by default and supports self-hosted
instances through --url. The API key is read from --api-key or from the
MYTHRIL_API_KEY environment variable.

Examples:
  # Submit bytecode against the hosted API
  mythril submit 0x606060405260043610603f... --api-key my-key

  # Submit bytecode read from a file, against a local instance
  mythril submit --file build/contract.bin --url http://localhost:3100
")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Submit bytecode for security analysis
    ///
    /// Performs one POST to the analysis endpoint and prints the returned
    /// job id. No retries; rerun the command on transient failures.
    Submit(SubmitArgs),
}

#[derive(clap::Args)]
pub struct SubmitArgs {
    /// Contract bytecode to analyze (alternative: --file)
    #[arg(
        value_name = "BYTECODE",
        value_parser = bytecode_value_parser,
        conflicts_with = "file",
        required_unless_present = "file"
    )]
    pub bytecode: Option<Bytecode>,

    /// Read the bytecode from a file instead of the command line
    #[arg(
        long,
        value_name = "PATH",
        value_hint = clap::ValueHint::FilePath
    )]
    pub file: Option<PathBuf>,

    /// API key, sent as a bearer token
    #[arg(long = "api-key", value_name = "KEY", env = "MYTHRIL_API_KEY")]
    pub api_key: String,

    /// Analysis API endpoint URL
    #[arg(
        long,
        value_name = "URL",
        value_hint = clap::ValueHint::Url,
        value_parser = Url::parse,
        default_value = DEFAULT_API_URL
    )]
    pub url: Url,
}
