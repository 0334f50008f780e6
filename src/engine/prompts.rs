//! Prompt构建器 - 调研引擎使用的提示词模板
//!
//! 每个构建函数都是其结构化输入的纯函数，不依赖任何隐藏状态，
//! 保证引擎行为在测试中可通过替换后端完全复现。

use crate::engine::knowledge::KnowledgeSet;
use crate::utils::truncate_for_prompt;

/// 嵌入提取prompt的原始内容的字符预算
const CONTENTS_CHAR_BUDGET: usize = 25000;

/// 调研引擎的统一系统提示词
pub const RESEARCHER_SYSTEM_PROMPT: &str = r#"你是一名资深的课题调研专家，擅长把复杂主题拆解为可独立调研的子问题，并从素材中提炼结构化结论。

工作要求：
1. 输出务必忠于素材与常识，不编造无依据的结论
2. 当要求按行输出列表时，每行一条，不要编号、不要前缀符号、不要输出任何额外说明
3. 使用与调研主题相同的语言作答"#;

/// 构建子查询生成prompt
///
/// 要求模型基于当前主题与已有发现，生成至多max_queries个调研方向互不重叠的子查询。
pub fn queries_prompt(query: &str, max_queries: usize, knowledge: &KnowledgeSet) -> String {
    let mut prompt = format!(
        r#"围绕以下调研主题，生成至多{}个值得深入调研的子查询，每行一个：

## 调研主题
{}
"#,
        max_queries, query
    );

    if !knowledge.is_empty() {
        prompt.push_str("\n## 已有调研发现（新的子查询应避免与这些发现重复，尽量探索未覆盖的方向）\n");
        for learning in knowledge.iter() {
            prompt.push_str(&format!("- {}\n", learning));
        }
    }

    prompt
}

/// 构建单个子查询的深入调研prompt
pub fn deep_dive_prompt(query: &str) -> String {
    format!(
        r#"请针对以下查询进行详尽调研，输出尽可能具体、详实的内容，包含关键事实、数据与背景：

## 查询
{}"#,
        query
    )
}

/// 构建发现提取prompt
///
/// 要求模型从调研内容中提炼至多max_learnings条原子化发现，每行一条。
/// 过长的原始内容在嵌入前按字符预算截断。
pub fn extraction_prompt(query: &str, contents: &str, max_learnings: usize) -> String {
    format!(
        r#"从以下调研内容中提炼至多{}条关键发现，每行一条。每条发现应是独立、自包含的单句事实，包含具体的实体、数据或结论：

## 查询
{}

## 调研内容
{}"#,
        max_learnings,
        query,
        truncate_for_prompt(contents, CONTENTS_CHAR_BUDGET)
    )
}

/// 构建后续问题生成prompt
///
/// 基于合并后的知识集提出至多max_questions个后续研究方向。
pub fn follow_up_prompt(query: &str, max_questions: usize, knowledge: &KnowledgeSet) -> String {
    let mut prompt = format!(
        r#"围绕调研主题「{}」，结合以下已有发现，提出至多{}个最值得继续深挖的后续问题，每行一个：
"#,
        query, max_questions
    );

    if knowledge.is_empty() {
        prompt.push_str("\n（当前尚无已有发现）\n");
    } else {
        prompt.push_str("\n## 已有调研发现\n");
        for learning in knowledge.iter() {
            prompt.push_str(&format!("- {}\n", learning));
        }
    }

    prompt
}

/// 构建最终报告prompt
///
/// 嵌入原始主题、本次会话的深度/广度（仅作来源说明）以及全部发现，
/// 每条发现以独立的learning标签包裹。
pub fn final_report_prompt(
    query: &str,
    depth: u8,
    breadth: usize,
    knowledge: &KnowledgeSet,
) -> String {
    let mut prompt = format!(
        r#"基于以下调研发现，撰写一份关于「{}」的完整调研报告。报告使用Markdown格式，要求结构清晰、论述充分，覆盖全部重要发现。

本次调研配置：深度={}，广度={}（仅用于说明报告来源）。

## 调研发现
"#,
        query, depth, breadth
    );

    for (index, learning) in knowledge.iter().enumerate() {
        prompt.push_str(&format!(
            "<learning id=\"{}\">\n{}\n</learning>\n",
            index + 1,
            learning
        ));
    }

    prompt
}
