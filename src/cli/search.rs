//! # search 子命令 CLI 定义
//!
//! 根据 MP4 文件名批量搜索 YouTube 视频。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/search.rs`

use clap::Args;
use std::path::PathBuf;

/// search 子命令参数
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Input directory containing MP4 files
    pub input: PathBuf,

    /// Output file for the annotated link listing
    #[arg(default_value = "youtube_links.txt")]
    pub output: PathBuf,
}
