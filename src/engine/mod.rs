//! 调研引擎 - 递归式课题调研的编排与核心算法
//
// 流程概览：
// workflow::launch -> tree::research（递归展开/合并/终止） -> report::synthesize -> outlet落盘

pub mod context;
pub mod knowledge;
pub mod outlet;
pub mod prompts;
pub mod report;
pub mod tree;
pub mod workflow;
