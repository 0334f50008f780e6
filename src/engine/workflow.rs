use anyhow::{Context as _, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::sync::Arc;

use crate::config::Config;
use crate::engine::context::ResearchContext;
use crate::engine::knowledge::KnowledgeSet;
use crate::engine::outlet::{ArtifactKind, DiskOutlet};
use crate::engine::{report, tree};
use crate::llm::LLMClient;

/// 会话摘要，随报告一起落盘
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub query: String,
    pub depth: u8,
    pub breadth: usize,
    pub learnings_count: usize,
    pub learnings: Vec<String>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

/// 启动调研工作流
///
/// 配置校验先于任何模型调用，非法配置在消耗配额之前被拒绝。
pub async fn launch(config: &Config) -> Result<()> {
    config.validate()?;

    let llm_client = LLMClient::new(config.clone())?;

    // 启动时检查模型连接
    llm_client.check_connection().await?;

    let outlet = DiskOutlet::new(&config.internal_path)?;
    println!("📂 会话产物目录: {}", outlet.session_dir().display());

    let context = ResearchContext::with_collaborators(
        config.clone(),
        Arc::new(llm_client),
        Arc::new(outlet),
    );
    execute(&context).await
}

/// 执行调研工作流：递归调研、综合报告、落盘
pub async fn execute(context: &ResearchContext) -> Result<()> {
    let config = &context.config;
    config.validate()?;

    let query = config.query_text().to_string();
    let started_at = Local::now();

    println!(
        "🚀 开始调研: {}（深度={}，广度={}）",
        query, config.depth, config.breadth
    );

    // 递归调研，根节点从空知识集出发
    let knowledge = tree::research(
        context,
        &query,
        config.depth,
        config.breadth,
        KnowledgeSet::new(),
    )
    .await?;

    println!("✓ 调研完成，共获得{}条发现", knowledge.len());

    // 综合最终报告
    println!("🖊️ 正在综合调研报告...");
    let report_text =
        report::synthesize(context, &query, config.depth, config.breadth, &knowledge).await?;
    context.outlet.save(ArtifactKind::Reports, &report_text)?;

    // 落盘用户侧产物：报告与会话摘要
    fs::create_dir_all(&config.output_path)
        .context(format!("Failed to create output dir: {:?}", config.output_path))?;

    let report_path = config.output_path.join("report.md");
    fs::write(&report_path, &report_text)?;

    let finished_at = Local::now();
    let summary = SessionSummary {
        query,
        depth: config.depth,
        breadth: config.breadth,
        learnings_count: knowledge.len(),
        learnings: knowledge.learnings().to_vec(),
        started_at,
        finished_at,
    };
    let summary_path = config.output_path.join("session.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;

    println!("💾 报告已保存: {}", report_path.display());

    Ok(())
}
