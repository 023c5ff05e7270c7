use crate::config::INPUT_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub analysis: AnalysisConfig,
    pub input: InputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn default_input_path() -> String {
    INPUT_FILE.to_string()
}

fn default_base_dir() -> String {
    ".".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AnalyzerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AnalyzerError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalyzerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("analysis.name", &self.analysis.name)?;
        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_input_extension("input.path", &self.input.path, &["csv", "txt"])?;
        validation::validate_path("input.base_dir", &self.input.base_dir)?;

        if let Some(unresolved) = ENV_VAR.captures(&self.input.base_dir) {
            return Err(AnalyzerError::InvalidConfigValueError {
                field: "input.base_dir".to_string(),
                value: self.input.base_dir.clone(),
                reason: format!("Environment variable {} is not set", &unresolved[1]),
            });
        }

        Ok(())
    }

    /// 完整的輸入檔路徑
    pub fn resolved_input_path(&self) -> std::path::PathBuf {
        Path::new(&self.input.base_dir).join(&self.input.path)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn base_dir(&self) -> &str {
        &self.input.base_dir
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
