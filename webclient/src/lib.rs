pub mod client;
pub mod error;
pub mod model;

pub use client::{ApiConfig, ExtractApi, ExtractClient};
pub use error::{Error, Result};
pub use model::{ExtractRequest, ExtractResponse, Extraction};
pub use url::Url;
