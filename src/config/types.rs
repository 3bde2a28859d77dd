use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub text_model: TextModelConfig,
    #[serde(default)]
    pub face_model: FaceModelConfig,
    #[serde(default)]
    pub scratch: ScratchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// Largest accepted request body in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Hugging Face style text-classification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextModelConfig {
    #[serde(default = "default_text_base_url")]
    pub base_url: String,
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// DeepFace style face-analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceModelConfig {
    #[serde(default = "default_face_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScratchConfig {
    /// Directory for decoded images. Must be readable by the face model at the same path.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ScratchConfig {
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_text_base_url(),
            model: default_text_model(),
            api_key: None,
        }
    }
}

impl Default for FaceModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_face_base_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_bytes() -> usize {
    25 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_text_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_text_model() -> String {
    "j-hartmann/emotion-english-distilroberta-base".to_string()
}

fn default_face_base_url() -> String {
    "http://127.0.0.1:5005".to_string()
}
