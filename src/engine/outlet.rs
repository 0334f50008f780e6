//! 产物出口 - 调研过程与结果的持久化
//!
//! 每次模型调用后，协作方把原始产物写入出口留作审计痕迹；
//! 出口不参与知识集合并算法本身的正确性。

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 过程产物类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// 子查询列表
    Queries,
    /// 发现提取结果
    Learnings,
    /// 后续问题列表
    Questions,
    /// 最终报告
    Reports,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Queries => write!(f, "queries"),
            ArtifactKind::Learnings => write!(f, "learnings"),
            ArtifactKind::Questions => write!(f, "questions"),
            ArtifactKind::Reports => write!(f, "reports"),
        }
    }
}

/// 产物出口能力
pub trait Outlet: Send + Sync {
    /// 保存一份产物，返回其存储位置
    fn save(&self, kind: ArtifactKind, content: &str) -> Result<PathBuf>;
}

/// 磁盘出口 - 把产物按会话目录落盘
///
/// 目录结构：<internal_path>/sessions/<时间戳>/<序号>-<类别>.md，
/// 序号按写入顺序递增，使审计痕迹可按时间线回放。
pub struct DiskOutlet {
    session_dir: PathBuf,
    sequence: AtomicUsize,
}

impl DiskOutlet {
    /// 在internal_path下创建一个新的会话目录
    pub fn new(internal_path: &PathBuf) -> Result<Self> {
        let session_dir = internal_path
            .join("sessions")
            .join(Local::now().format("%Y%m%d-%H%M%S").to_string());
        fs::create_dir_all(&session_dir)?;

        Ok(Self {
            session_dir,
            sequence: AtomicUsize::new(0),
        })
    }

    /// 本次会话的产物目录
    pub fn session_dir(&self) -> &PathBuf {
        &self.session_dir
    }
}

impl Outlet for DiskOutlet {
    fn save(&self, kind: ArtifactKind, content: &str) -> Result<PathBuf> {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let file_path = self
            .session_dir
            .join(format!("{:03}-{}.md", sequence, kind));
        fs::write(&file_path, content)?;
        Ok(file_path)
    }
}

/// 内存出口 - 供测试检查审计痕迹，不落盘
#[derive(Default)]
pub struct MemoryOutlet {
    artifacts: Mutex<Vec<(ArtifactKind, String)>>,
}

impl MemoryOutlet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回指定类别的全部产物内容
    pub fn artifacts_of(&self, kind: ArtifactKind) -> Vec<String> {
        self.artifacts
            .lock()
            .expect("artifact lock poisoned")
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, content)| content.clone())
            .collect()
    }

    /// 产物总数
    pub fn count(&self) -> usize {
        self.artifacts.lock().expect("artifact lock poisoned").len()
    }
}

impl Outlet for MemoryOutlet {
    fn save(&self, kind: ArtifactKind, content: &str) -> Result<PathBuf> {
        let mut artifacts = self.artifacts.lock().expect("artifact lock poisoned");
        let location = PathBuf::from(format!("memory://{}/{}", kind, artifacts.len()));
        artifacts.push((kind, content.to_string()));
        Ok(location)
    }
}
