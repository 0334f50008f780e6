//! 调研知识集 - 贯穿一次调研会话的发现累积容器

use serde::Serialize;

/// 一条原子化的调研发现，以单行文本表示，按文本完全相等判定同一性
pub type Learning = String;

/// 调研知识集
///
/// 有序、按文本完全相等去重的发现序列。首次出现的位置即最终位置，
/// 已入集的发现永不移除，重复发现被直接忽略，因此知识集在一次
/// 会话内单调增长。
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct KnowledgeSet {
    learnings: Vec<Learning>,
}

impl KnowledgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一条发现，重复文本被忽略
    ///
    /// 返回该发现是否为新增。
    pub fn insert(&mut self, learning: Learning) -> bool {
        if self.contains(&learning) {
            return false;
        }
        self.learnings.push(learning);
        true
    }

    /// 合并另一个知识集，保持自身已有顺序，追加对方的新发现
    ///
    /// 返回新增发现的数量。
    pub fn merge(&mut self, other: KnowledgeSet) -> usize {
        let mut added = 0;
        for learning in other.learnings {
            if self.insert(learning) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, text: &str) -> bool {
        self.learnings.iter().any(|l| l == text)
    }

    /// 是否为other的超集，且other中元素的相对顺序在本集中得以保留
    pub fn is_ordered_superset_of(&self, other: &KnowledgeSet) -> bool {
        let mut cursor = self.learnings.iter();
        other
            .learnings
            .iter()
            .all(|expected| cursor.any(|l| l == expected))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.learnings.iter().map(String::as_str)
    }

    pub fn learnings(&self) -> &[Learning] {
        &self.learnings
    }

    pub fn len(&self) -> usize {
        self.learnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.learnings.is_empty()
    }
}

impl FromIterator<Learning> for KnowledgeSet {
    fn from_iter<T: IntoIterator<Item = Learning>>(iter: T) -> Self {
        let mut set = KnowledgeSet::new();
        for learning in iter {
            set.insert(learning);
        }
        set
    }
}
