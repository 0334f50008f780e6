//! 报告综合器 - 把最终知识集汇成一份调研报告

use anyhow::Result;

use crate::engine::context::ResearchContext;
use crate::engine::knowledge::KnowledgeSet;
use crate::engine::prompts;

/// 综合最终调研报告
///
/// 单次模型调用，报告文本原样返回，本层不做任何后处理或截断。
pub async fn synthesize(
    context: &ResearchContext,
    query: &str,
    depth: u8,
    breadth: usize,
    knowledge: &KnowledgeSet,
) -> Result<String> {
    let prompt = prompts::final_report_prompt(query, depth, breadth, knowledge);
    let report = context
        .generator
        .generate(Some(prompts::RESEARCHER_SYSTEM_PROMPT), &prompt)
        .await?;
    Ok(report)
}
