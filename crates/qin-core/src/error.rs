//! 统一错误类型定义.
//!
//! 所有 Qin crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// Qin 统一错误类型
#[derive(Debug, Error)]
pub enum QinError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的码流 (合法但超出本解码器范围)
    #[error("不支持的码流: {0}")]
    Unsupported(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 已到达流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 无效数据 (损坏的码流等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Internal(String),
}

/// Qin 统一 Result 类型
pub type QinResult<T> = Result<T, QinError>;
