use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

/// 调研深度的合法范围
pub const DEPTH_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// 调研广度的合法范围
pub const BREADTH_RANGE: std::ops::RangeInclusive<usize> = 2..=10;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 配置校验错误
///
/// 配置校验在任何模型调用之前完成，非法配置不会消耗任何配额。
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("缺少调研主题，请通过命令行或配置文件提供query")]
    MissingQuery,

    #[error("调研深度 {0} 超出合法范围 [1, 5]")]
    DepthOutOfRange(u8),

    #[error("调研广度 {0} 超出合法范围 [2, 10]")]
    BreadthOutOfRange(usize),
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// 调研主题
    pub query: Option<String>,

    /// 调研深度：递归展开的最大层数
    pub depth: u8,

    /// 调研广度：单层展开的子查询/后续问题数量上限
    pub breadth: usize,

    /// 输出路径
    pub output_path: PathBuf,

    /// 内部工作目录路径 (.deepresearch)，存放每次会话的过程产物
    pub internal_path: PathBuf,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 推理模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 单次调用超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 校验配置合法性
    ///
    /// query必须非空，depth与breadth必须落在各自的合法范围内。
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.query {
            Some(query) if !query.trim().is_empty() => {}
            _ => return Err(ConfigError::MissingQuery),
        }

        if !DEPTH_RANGE.contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }

        if !BREADTH_RANGE.contains(&self.breadth) {
            return Err(ConfigError::BreadthOutOfRange(self.breadth));
        }

        Ok(())
    }

    /// 获取调研主题，调用前应先通过validate校验
    pub fn query_text(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: None,
            depth: 2,
            breadth: 4,
            output_path: PathBuf::from("./deepresearch.out"),
            internal_path: PathBuf::from("./.deepresearch"),
            llm: LLMConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("DEEPRESEARCH_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api-inference.modelscope.cn/v1"),
            model: String::from("Qwen/Qwen3-Next-80B-A3B-Instruct"),
            max_tokens: 131072,
            temperature: 0.3,
            timeout_seconds: 300,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
