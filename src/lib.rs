//! # Mythril Analysis Client
//!
//! A Rust client for the Mythril smart contract security analysis API.
//! This library submits compiled contract bytecode for analysis and
//! returns the job identifier assigned by the service.
//!
//! ## Features
//!
//! - **Bytecode Submission**: Queue deployed bytecode for security analysis
//! - **Configurable Endpoint**: Target the hosted API or any self-hosted instance
//! - **Type Safety**: Strong typing for bytecode payloads
//! - **Error Handling**: Tagged error variants so callers can tell network,
//!   HTTP status, and response parsing failures apart
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mythril_client::{api::ApiClient, bytecode::Bytecode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an API client against the hosted endpoint
//! let client = ApiClient::hosted("my-api-key")?;
//!
//! // Submit bytecode for analysis
//! let bytecode = Bytecode::new("0x606060...")?;
//! let uuid = client.submit_bytecode(&bytecode)?;
//! println!("analysis job: {}", uuid);
//! # Ok(())
//! # }
//! ```

/// API client and wire types for the analysis service
pub mod api;

/// Validated bytecode payload handling
pub mod bytecode;

/// Shared error types
pub mod errors;
