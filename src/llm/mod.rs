//! 文本生成端口 - 调研引擎与模型后端之间的唯一接口

use async_trait::async_trait;
use thiserror::Error;

pub mod client;

pub use client::LLMClient;

/// 模型后端调用错误
///
/// 后端失败是致命的：引擎不捕获、不重试，错误沿调用树向上传播，
/// 中止整个调研流程。
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("模型服务调用失败: {0}")]
    Generation(String),

    #[error("模型服务调用超时（{0}秒）")]
    Timeout(u64),
}

/// 文本生成能力的抽象
///
/// 引擎只依赖这一个口子：给定可选的系统指令与用户提示词，返回生成文本。
/// 任何后端文本（包括空文本）都是合法返回值，内容解析由调用方宽容处理。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, BackendError>;
}
