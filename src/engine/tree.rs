//! 调研树控制器 - 递归展开、合并与终止的核心算法
//!
//! 一次调用即一个调研节点，由（查询、剩余深度、广度、入参知识集）定义。
//! 节点没有持久身份，调研树只存在于调用栈上。

use anyhow::Result;
use futures::future::BoxFuture;

use crate::engine::context::ResearchContext;
use crate::engine::knowledge::KnowledgeSet;
use crate::engine::outlet::ArtifactKind;
use crate::engine::prompts;
use crate::utils::non_empty_lines;

/// 递归调研一个查询，返回在入参知识集之上扩充后的知识集
///
/// depth为0时原样返回入参知识集，不发起任何模型调用，这是唯一的
/// 终止条件。返回的知识集保证是入参的有序超集：入参中的发现全部
/// 保留且相对顺序不变，新发现按发现顺序追加。
///
/// 每个递归子调用收到的是本层递归前的合并知识集，兄弟子树在各自
/// 执行期间看不到彼此的新发现，只在最终合并时汇总。
pub fn research<'a>(
    context: &'a ResearchContext,
    query: &'a str,
    depth: u8,
    breadth: usize,
    inbound: KnowledgeSet,
) -> BoxFuture<'a, Result<KnowledgeSet>> {
    Box::pin(async move {
        // 基础情形：深度耗尽，不再展开
        if depth == 0 {
            return Ok(inbound);
        }

        if context.config.verbose {
            println!(
                "🔍 [深度{}] 展开查询: {}（已有{}条发现）",
                depth,
                query,
                inbound.len()
            );
        }

        // 查询展开：生成候选子查询，按行解析，至多取breadth条
        let queries_prompt = prompts::queries_prompt(query, breadth, &inbound);
        let raw_queries = context
            .generator
            .generate(Some(prompts::RESEARCHER_SYSTEM_PROMPT), &queries_prompt)
            .await?;
        context.outlet.save(ArtifactKind::Queries, &raw_queries)?;

        let sub_queries: Vec<String> = non_empty_lines(&raw_queries)
            .into_iter()
            .take(breadth)
            .collect();

        // 逐个子查询调研：先深入调研得到原始内容，再从内容中提取发现
        let mut discovered: Vec<String> = Vec::new();
        for sub_query in &sub_queries {
            if context.config.verbose {
                println!("   📖 调研子查询: {}", sub_query);
            }

            let contents = context
                .generator
                .generate(
                    Some(prompts::RESEARCHER_SYSTEM_PROMPT),
                    &prompts::deep_dive_prompt(sub_query),
                )
                .await?;

            let raw_learnings = context
                .generator
                .generate(
                    Some(prompts::RESEARCHER_SYSTEM_PROMPT),
                    &prompts::extraction_prompt(sub_query, &contents, breadth),
                )
                .await?;
            context
                .outlet
                .save(ArtifactKind::Learnings, &raw_learnings)?;

            discovered.extend(non_empty_lines(&raw_learnings));
        }

        // 合并第一步：把本层全部新发现按发现顺序折叠进入参知识集
        let mut combined = inbound;
        let mut novel = 0;
        for learning in discovered {
            if combined.insert(learning) {
                novel += 1;
            }
        }

        if context.config.verbose {
            println!(
                "   💡 [深度{}] 本层新增{}条发现，累计{}条",
                depth,
                novel,
                combined.len()
            );
        }

        // 后续问题生成：基于合并后的知识集，至多取breadth条
        let follow_up_prompt = prompts::follow_up_prompt(query, breadth, &combined);
        let raw_questions = context
            .generator
            .generate(Some(prompts::RESEARCHER_SYSTEM_PROMPT), &follow_up_prompt)
            .await?;
        context
            .outlet
            .save(ArtifactKind::Questions, &raw_questions)?;

        let follow_ups: Vec<String> = non_empty_lines(&raw_questions)
            .into_iter()
            .take(breadth)
            .collect();

        // 递归下钻：每个子调用拿到的都是本层递归前的combined快照，
        // 最终按子调用顺序把各子树的结果折叠回来
        let mut outbound = combined.clone();
        for question in &follow_ups {
            let child_result =
                research(context, question, depth - 1, breadth, combined.clone()).await?;
            outbound.merge(child_result);
        }

        Ok(outbound)
    })
}
