// Re-export the API module components
pub use self::{
    client::{ApiClient, DEFAULT_API_URL},
    errors::ApiClientError,
    models::{AnalysisDispatch, AnalysisRequest, Error},
};

// Module declarations
mod client;
mod errors;
mod models;
