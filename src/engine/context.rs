use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::engine::outlet::{DiskOutlet, Outlet};
use crate::llm::{LLMClient, TextGenerator};

/// 调研上下文
///
/// 一次调研会话内共享的协作方集合：文本生成端口、产物出口与配置。
#[derive(Clone)]
pub struct ResearchContext {
    /// 文本生成端口，用于与AI通信
    pub generator: Arc<dyn TextGenerator>,
    /// 产物出口，留存过程产物作审计痕迹
    pub outlet: Arc<dyn Outlet>,
    /// 配置
    pub config: Config,
}

impl ResearchContext {
    /// 创建新的调研上下文，生成端口与出口按配置装配
    pub fn new(config: Config) -> Result<Self> {
        let generator = Arc::new(LLMClient::new(config.clone())?);
        let outlet = Arc::new(DiskOutlet::new(&config.internal_path)?);

        Ok(Self {
            generator,
            outlet,
            config,
        })
    }

    /// 使用指定的协作方装配上下文
    pub fn with_collaborators(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        outlet: Arc<dyn Outlet>,
    ) -> Self {
        Self {
            generator,
            outlet,
            config,
        }
    }
}
