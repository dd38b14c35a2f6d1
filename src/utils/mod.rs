//! # 工具模块
//!
//! 提供终端输出和进度显示的公共函数。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
