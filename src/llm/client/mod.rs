//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::config::Config;
use crate::llm::{BackendError, TextGenerator};

mod providers;

use providers::ProviderClient;

/// LLM客户端 - 提供统一的LLM服务接口
///
/// 单次调用受timeout_seconds约束；调用失败不在此层重试，
/// 错误以BackendError形式抛给调研引擎处理。
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    ///
    /// 在调研流程启动前完成一次廉价调用，使鉴权、网络类问题尽早暴露。
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        match self
            .generate(Some("You are a helpful assistant."), "Hello")
            .await
        {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e.into())
            }
        }
    }

    async fn prompt_inner(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self
            .client
            .create_agent(&self.config.llm.model, system_prompt, &self.config.llm);
        agent.prompt(user_prompt).await
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    async fn generate(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, BackendError> {
        let system_prompt = system_prompt.unwrap_or_default();
        let timeout_seconds = self.config.llm.timeout_seconds;

        let call = self.prompt_inner(system_prompt, user_prompt);
        match tokio::time::timeout(Duration::from_secs(timeout_seconds), call).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(BackendError::Generation(e.to_string())),
            Err(_) => Err(BackendError::Timeout(timeout_seconds)),
        }
    }
}
