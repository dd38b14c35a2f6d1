//! # download 子命令 CLI 定义
//!
//! 从链接列表文件批量下载 YouTube 音频为 MP3。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/download.rs`

use clap::Args;
use std::path::PathBuf;

/// download 子命令参数
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Text file containing YouTube links, one per line ('#' starts a comment)
    pub links_file: PathBuf,

    /// Output directory for downloaded MP3 files
    #[arg(default_value = "./mp3_downloads")]
    pub output: PathBuf,
}
