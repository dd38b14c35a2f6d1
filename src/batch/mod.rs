//! # 批量处理模块
//!
//! 提供统一的批量任务调度能力：枚举 → 分发 → 收集 → 汇总。
//!
//! ## 功能
//! - 枚举工作项（视频文件、链接列表、搜索关键词）
//! - 串行或有界并行分发
//! - 单项失败隔离，汇总统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use runner::{BatchRunner, BatchStats, Outcome};
