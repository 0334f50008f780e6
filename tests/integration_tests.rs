use async_trait::async_trait;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use deepresearch_rs::config::{Config, ConfigError};
use deepresearch_rs::engine::context::ResearchContext;
use deepresearch_rs::engine::outlet::{ArtifactKind, DiskOutlet, Outlet};
use deepresearch_rs::engine::workflow::execute;
use deepresearch_rs::llm::{BackendError, TextGenerator};

/// 按提示词内容路由应答的模型后端替身
///
/// 三条子查询、每条两条发现、不产生后续问题，报告固定返回。
struct RoutingGenerator {
    calls: AtomicUsize,
}

impl RoutingGenerator {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextGenerator for RoutingGenerator {
    async fn generate(
        &self,
        _system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, BackendError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if user_prompt.contains("值得深入调研的子查询") {
            return Ok("行业规模\n代表企业\n技术路线".to_string());
        }
        if user_prompt.contains("详尽调研") {
            return Ok(format!("第{}次调用生成的调研内容", call));
        }
        if user_prompt.contains("提炼至多") {
            // 两条发现，其中一条在所有子查询间重复，用于验证去重
            return Ok(format!("重复出现的共性结论\n来自第{}次调用的独立发现", call));
        }
        if user_prompt.contains("后续问题") {
            return Ok(String::new());
        }
        if user_prompt.contains("撰写一份") {
            return Ok("# 调研报告\n\n这是综合后的最终报告。\n".to_string());
        }

        // 连接检查等其他调用
        Ok("ok".to_string())
    }
}

fn test_config(temp_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.query = Some("人形机器人产业".to_string());
    config.depth = 1;
    config.breadth = 3;
    config.output_path = temp_dir.path().join("output");
    config.internal_path = temp_dir.path().join(".deepresearch");
    config
}

#[tokio::test]
async fn test_full_research_run_writes_report_and_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let outlet = DiskOutlet::new(&config.internal_path).unwrap();
    let session_dir = outlet.session_dir().clone();

    let context = ResearchContext::with_collaborators(
        config.clone(),
        Arc::new(RoutingGenerator::new()),
        Arc::new(outlet),
    );

    execute(&context).await.unwrap();

    // 用户侧产物：报告与会话摘要
    let report = fs::read_to_string(config.output_path.join("report.md")).unwrap();
    assert!(report.contains("最终报告"));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.output_path.join("session.json")).unwrap())
            .unwrap();
    assert_eq!(summary["query"], "人形机器人产业");
    assert_eq!(summary["depth"], 1);
    assert_eq!(summary["breadth"], 3);
    // 3条子查询各2条发现，其中共性结论只保留一次：3 + 1
    assert_eq!(summary["learnings_count"], 4);

    // 审计痕迹：1份queries + 3份learnings + 1份questions + 1份reports
    let artifact_count = fs::read_dir(&session_dir).unwrap().count();
    assert_eq!(artifact_count, 6);
}

#[tokio::test]
async fn test_dedup_survives_into_session_summary() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let context = ResearchContext::with_collaborators(
        config.clone(),
        Arc::new(RoutingGenerator::new()),
        Arc::new(DiskOutlet::new(&config.internal_path).unwrap()),
    );

    execute(&context).await.unwrap();

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.output_path.join("session.json")).unwrap())
            .unwrap();
    let learnings = summary["learnings"].as_array().unwrap();

    let duplicates = learnings
        .iter()
        .filter(|l| l.as_str() == Some("重复出现的共性结论"))
        .count();
    assert_eq!(duplicates, 1);
}

#[tokio::test]
async fn test_execute_rejects_invalid_config_before_any_call() {
    let temp_dir = TempDir::new().unwrap();

    // 缺少query
    let mut config = test_config(&temp_dir);
    config.query = None;
    assert_eq!(config.validate(), Err(ConfigError::MissingQuery));

    // 深度越界
    let mut config = test_config(&temp_dir);
    config.depth = 0;
    let generator = Arc::new(RoutingGenerator::new());
    let context = ResearchContext::with_collaborators(
        config.clone(),
        generator.clone(),
        Arc::new(DiskOutlet::new(&config.internal_path).unwrap()),
    );

    let result = execute(&context).await;
    assert!(result.is_err());
    // 被拒绝的配置不消耗任何模型调用
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);

    // 广度越界
    let mut config = test_config(&temp_dir);
    config.breadth = 11;
    assert_eq!(config.validate(), Err(ConfigError::BreadthOutOfRange(11)));
}

#[tokio::test]
async fn test_disk_outlet_writes_sequenced_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let internal_path = temp_dir.path().join(".deepresearch");

    let first = DiskOutlet::new(&internal_path).unwrap();
    let location = first.save(ArtifactKind::Queries, "q1\nq2").unwrap();

    assert!(location.exists());
    assert!(location.starts_with(first.session_dir()));
    assert_eq!(fs::read_to_string(&location).unwrap(), "q1\nq2");

    // 产物按写入顺序编号
    let second_location = first.save(ArtifactKind::Learnings, "l1").unwrap();
    assert!(
        second_location
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("001-")
    );
}
