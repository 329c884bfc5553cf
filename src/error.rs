/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Recommendation API error: {0}")]
    ExternalApi(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_api_display() {
        let err = AppError::ExternalApi("status 500: oops".to_string());
        assert_eq!(
            err.to_string(),
            "Recommendation API error: status 500: oops"
        );
    }

    #[test]
    fn test_terminal_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
