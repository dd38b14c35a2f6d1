//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量 MP4 转 MP3
//! - `download`: 从链接列表批量下载 MP3
//! - `search`: 根据文件名批量搜索 YouTube
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, download, search

pub mod convert;
pub mod download;
pub mod search;

use clap::{Parser, Subcommand};

/// Autility - 个人音频库统一工具箱
#[derive(Parser)]
#[command(name = "autility")]
#[command(version)]
#[command(about = "A unified personal audio library toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert all MP4 files in a directory to high quality MP3
    Convert(convert::ConvertArgs),

    /// Download MP3 audio from a text file of YouTube links
    Download(download::DownloadArgs),

    /// Search YouTube for the best match of each MP4 file name
    Search(search::SearchArgs),
}
