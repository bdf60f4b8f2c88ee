pub mod config;
pub mod error;
pub mod logging;
pub mod sds;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use sds::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.index.backend, IndexBackend::Memory);
        assert_eq!(config.documents.pdf_dir, "./pdfs");
    }

    #[test]
    fn test_error_handling() {
        let error = LocatorError::not_found("product");
        assert_eq!(error.error_code(), "NOT_FOUND");
        assert_eq!(error.http_status_code(), 404);

        let error = LocatorError::database("connection refused");
        assert_eq!(error.http_status_code(), 500);

        let response = ErrorResponse::from(error);
        assert_eq!(response.code, "DATABASE_ERROR");
    }

    #[test]
    fn test_pipeline_composition() {
        // Raw candidate -> cleaned -> normalized lookup key.
        let key = normalize_key(&clean_product_name("Baby Pink Lavish™ Company LLC"));
        assert_eq!(key, "baby pink lavish");
    }
}
