use crate::aws::AwsConfig;
use crate::error::AppError;
use crate::summary::{DEFAULT_ANTHROPIC_VERSION, DEFAULT_MAX_TOKENS, PromptLanguage};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Object key used when `CSV_KEY` is not set
pub const DEFAULT_CSV_KEY: &str = "sample-sales.csv";

const ENV_PREFIX: &str = "SALES";
const BUCKET_ENV: &str = "BUCKET_NAME";
const KEY_ENV: &str = "CSV_KEY";
const MODEL_ENV: &str = "MODEL_ID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub model: ModelConfig,
    pub aws: AwsConfig,
    pub logging: LoggingConfig,
}

/// Location of the sales CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_id: String,
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub language: PromptLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.bucket.trim().is_empty() {
            return Err(AppError::Config(format!(
                "data source bucket is required (set {})",
                BUCKET_ENV
            )));
        }
        if self.key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "data source key must not be empty (set {})",
                KEY_ENV
            )));
        }
        Ok(())
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model_id.trim().is_empty() {
            return Err(AppError::Config(format!(
                "model id is required (set {})",
                MODEL_ENV
            )));
        }
        if self.max_tokens == 0 {
            return Err(AppError::Config(
                "model.max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            key: DEFAULT_CSV_KEY.to_string(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: String::new(),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            language: PromptLanguage::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            model: ModelConfig::default(),
            aws: AwsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load from defaults, `config.yaml` if present, and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None, std::env::vars().collect())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_with_env(Some(path.as_ref()), std::env::vars().collect())
    }

    /// Layered load with an explicit environment.
    ///
    /// Later layers win: defaults, YAML file, `SALES_*` variables, then the
    /// Lambda variables `BUCKET_NAME`, `CSV_KEY` and `MODEL_ID`.
    pub fn load_with_env(
        path: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder =
            ConfigBuilder::builder().add_source(config::Config::try_from(&Config::default())?);

        match path {
            Some(path) if path.exists() => {
                builder = builder.add_source(File::from(path));
            }
            Some(_) => {}
            None if Path::new("config.yaml").exists() => {
                builder = builder.add_source(File::with_name("config"));
            }
            None => {}
        }

        let lambda_var = |name: &str| env.get(name).filter(|v| !v.is_empty()).cloned();
        let bucket = lambda_var(BUCKET_ENV);
        let key = lambda_var(KEY_ENV);
        let model_id = lambda_var(MODEL_ENV);

        builder = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(env)),
            )
            .set_override_option("source.bucket", bucket)?
            .set_override_option("source.key", key)?
            .set_override_option("model.model_id", model_id)?;

        builder.build()?.try_deserialize()
    }

    /// Reject configurations that cannot run an invocation
    pub fn validate(&self) -> Result<(), AppError> {
        self.source.validate()?;
        self.model.validate()
    }

    /// Copy safe to print, with AWS secrets masked
    pub fn redacted(&self) -> Self {
        Self {
            aws: self.aws.redacted(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.source.bucket, "");
        assert_eq!(config.source.key, "sample-sales.csv");
        assert_eq!(config.model.model_id, "");
        assert_eq!(config.model.anthropic_version, "bedrock-2023-05-31");
        assert_eq!(config.model.max_tokens, 200);
        assert_eq!(config.model.language, PromptLanguage::Ja);
        assert_eq!(config.aws.region, "us-east-1");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_lambda_environment_variables() {
        let config = Config::load_with_env(
            Some(Path::new("nonexistent.yaml")),
            env(&[
                ("BUCKET_NAME", "sales-data"),
                ("CSV_KEY", "2024/q1.csv"),
                ("MODEL_ID", "anthropic.claude-3-haiku-20240307-v1:0"),
            ]),
        )
        .unwrap();

        assert_eq!(config.source.bucket, "sales-data");
        assert_eq!(config.source.key, "2024/q1.csv");
        assert_eq!(
            config.model.model_id,
            "anthropic.claude-3-haiku-20240307-v1:0"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_csv_key_defaults_when_unset_or_empty() {
        let config = Config::load_with_env(
            Some(Path::new("nonexistent.yaml")),
            env(&[("BUCKET_NAME", "sales-data"), ("CSV_KEY", "")]),
        )
        .unwrap();

        assert_eq!(config.source.key, "sample-sales.csv");
    }

    #[test]
    fn test_prefixed_environment_variables() {
        let config = Config::load_with_env(
            Some(Path::new("nonexistent.yaml")),
            env(&[
                ("SALES_MODEL__MAX_TOKENS", "512"),
                ("SALES_MODEL__LANGUAGE", "en"),
                ("SALES_AWS__REGION", "ap-northeast-1"),
                ("SALES_LOGGING__FORMAT", "pretty"),
                ("UNRELATED", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(config.model.max_tokens, 512);
        assert_eq!(config.model.language, PromptLanguage::En);
        assert_eq!(config.aws.region, "ap-northeast-1");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_load_from_yaml_file() {
        let yaml_content = r#"
source:
  bucket: "yaml-bucket"
  key: "yaml.csv"
model:
  model_id: "yaml-model"
  max_tokens: 300
  language: "en"
aws:
  region: "eu-west-1"
logging:
  level: "debug"
"#;

        let mut temp_file = NamedTempFile::with_suffix(".yaml").unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = Config::load_with_env(Some(temp_file.path()), HashMap::new()).unwrap();

        assert_eq!(config.source.bucket, "yaml-bucket");
        assert_eq!(config.source.key, "yaml.csv");
        assert_eq!(config.model.model_id, "yaml-model");
        assert_eq!(config.model.max_tokens, 300);
        assert_eq!(config.model.language, PromptLanguage::En);
        assert_eq!(config.model.anthropic_version, "bedrock-2023-05-31");
        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let yaml_content = r#"
source:
  bucket: "yaml-bucket"
model:
  model_id: "yaml-model"
"#;

        let mut temp_file = NamedTempFile::with_suffix(".yaml").unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = Config::load_with_env(
            Some(temp_file.path()),
            env(&[("BUCKET_NAME", "env-bucket")]),
        )
        .unwrap();

        assert_eq!(config.source.bucket, "env-bucket");
        assert_eq!(config.model.model_id, "yaml-model");
    }

    #[test]
    fn test_validate_requires_bucket_and_model() {
        let mut config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("BUCKET_NAME"));

        config.source.bucket = "sales".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("MODEL_ID"));

        config.model.model_id = "model".to_string();
        assert!(config.validate().is_ok());

        config.model.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_redacted_masks_aws_secrets() {
        let mut config = Config::default();
        config.aws.secret_access_key = Some("secret".to_string());

        let redacted = config.redacted();
        assert_eq!(redacted.aws.secret_access_key.as_deref(), Some("********"));
        assert_eq!(redacted.source.key, config.source.key);
    }
}
