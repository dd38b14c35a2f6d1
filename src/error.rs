//! # 统一错误处理模块
//!
//! 定义 Autility 的所有错误类型，使用 `thiserror` 派生。
//!
//! 仅致命条件（环境缺失、输入缺失）以错误形式传播；
//! 单项处理失败由 `batch::runner::Outcome` 记录，不进入此处。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Autility 统一错误类型
#[derive(Error, Debug)]
pub enum AutilityError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH\n{hint}")]
    CommandNotFound { command: String, hint: String },

    // ─────────────────────────────────────────────────────────────
    // 批处理错误
    // ─────────────────────────────────────────────────────────────
    #[error("No valid YouTube links found in: {path}")]
    NoValidLinks { path: String },

    #[error("No MP4 files found in: {path}")]
    NoFilesFound { path: String },

    #[error("{failed} item(s) failed during batch processing")]
    BatchFailed { failed: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AutilityError>;
