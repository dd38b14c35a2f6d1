//! # 外部工具适配器模块
//!
//! 将单个工作项翻译为一次外部命令调用，
//! 并把调用结果归一化为 `batch::runner::Outcome`。
//!
//! 调用层面的任何失败都在适配器边界内转换，绝不向外抛出；
//! 唯一的例外是工具本身缺失——在分发开始之前检测一次并致命终止。
//!
//! ## 依赖关系
//! - 被 `commands/` 各模块调用
//! - 子模块: ffmpeg, ytdlp

pub mod ffmpeg;
pub mod ytdlp;
