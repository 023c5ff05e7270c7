use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::FileNotFound { .. } | AnalyzerError::IoError(_) => ErrorCategory::Input,
            AnalyzerError::ConfigError { .. }
            | AnalyzerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 給終端使用者看的訊息 (西班牙文，與報表一致)
    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyzerError::FileNotFound { path } => format!(
                "Error: No se pudo encontrar el archivo {}\nVerifique que el archivo existe en el directorio actual",
                path
            ),
            AnalyzerError::IoError(e) => format!("Error al leer el archivo: {}", e),
            AnalyzerError::ConfigError { message } => {
                format!("Error de configuración: {}", message)
            }
            AnalyzerError::InvalidConfigValueError { field, value, reason } => format!(
                "Error de configuración: valor '{}' inválido para '{}' ({})",
                value, field, reason
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalyzerError::FileNotFound { .. } => {
                "Check that the input file exists in the working directory"
            }
            AnalyzerError::IoError(_) => "Check file permissions and that the file is readable",
            AnalyzerError::ConfigError { .. } => "Make sure the config file is valid TOML",
            AnalyzerError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = AnalyzerError::FileNotFound {
            path: "codigos_postales_hmo.csv".to_string(),
        };
        let msg = err.user_friendly_message();
        assert!(msg.starts_with("Error: No se pudo encontrar el archivo codigos_postales_hmo.csv"));
        assert!(msg.ends_with("Verifique que el archivo existe en el directorio actual"));
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AnalyzerError = io.into();
        assert!(matches!(err, AnalyzerError::IoError(_)));
        assert_eq!(err.user_friendly_message(), "Error al leer el archivo: denied");
    }

    #[test]
    fn test_config_category() {
        let err = AnalyzerError::ConfigError {
            message: "bad toml".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
