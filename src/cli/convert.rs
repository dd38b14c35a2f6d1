//! # convert 子命令 CLI 定义
//!
//! 批量将目录中的 MP4 文件转换为 MP3。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing MP4 files
    pub input: PathBuf,

    /// Output directory (default: <INPUT>/mp3_output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Audio bitrate
    #[arg(short, long, default_value = "320k")]
    pub bitrate: String,

    /// Audio sample rate in Hz
    #[arg(short = 'r', long, default_value_t = 44100)]
    pub sample_rate: u32,

    /// Disable parallel processing
    #[arg(short, long, default_value_t = false)]
    pub sequential: bool,
}
