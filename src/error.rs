//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("容器为空: {0}")]
    EmptyContainer(&'static str),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边已存在: {from}>{to}")]
    EdgeAlreadyExists { from: String, to: String },

    #[error("边缺少权重: {from}>{to}")]
    MissingWeight { from: String, to: String },

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("尚未创建图")]
    NoGraph,

    #[error("图规模超出限制: {what} 为 {actual}, 上限 {limit}")]
    LimitExceeded {
        what: &'static str,
        actual: usize,
        limit: usize,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
