//! 边定义
//!
//! 有向边：源顶点、目标顶点、可选权重以及标记位

use crate::error::{Error, Result};
use crate::types::Weight;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 有向边
///
/// 相等性只取决于 (源, 目标) 有序对，与权重无关。
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// 源顶点标签
    src: String,
    /// 目标顶点标签
    dst: String,
    /// 权重
    weight: Option<Weight>,
    /// 标记
    #[serde(skip)]
    marked: bool,
}

impl Edge {
    /// 创建新边
    pub fn new(src: impl Into<String>, dst: impl Into<String>, weight: Option<Weight>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            weight,
            marked: false,
        }
    }

    /// 获取源顶点标签
    pub fn src(&self) -> &str {
        &self.src
    }

    /// 获取目标顶点标签
    pub fn dst(&self) -> &str {
        &self.dst
    }

    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// 获取权重，缺失时报错
    pub fn require_weight(&self) -> Result<Weight> {
        self.weight.ok_or_else(|| Error::MissingWeight {
            from: self.src.clone(),
            to: self.dst.clone(),
        })
    }

    pub fn set_weight(&mut self, weight: Option<Weight>) {
        self.weight = weight;
    }

    /// 按权重比较；任一方没有权重时无法比较
    pub fn cmp_weight(&self, other: &Edge) -> Option<Ordering> {
        match (self.weight, other.weight) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }

    /// 获取另一端顶点
    pub fn other_endpoint(&self, label: &str) -> &str {
        if label == self.dst {
            &self.src
        } else {
            &self.dst
        }
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn set_mark(&mut self) {
        self.marked = true;
    }

    pub fn clear_mark(&mut self) {
        self.marked = false;
    }

    /// 顶点重命名时改写端点
    pub(crate) fn rename_endpoint(&mut self, old: &str, new: &str) {
        if self.src == old {
            self.src = new.to_string();
        }
        if self.dst == old {
            self.dst = new.to_string();
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dst.hash(state);
    }
}

/// 输出 `src>dst:weight`，无权重时为 `src>dst:`
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}:", self.src, self.dst)?;
        if let Some(w) = self.weight {
            write!(f, "{}", w)?;
        }
        Ok(())
    }
}
