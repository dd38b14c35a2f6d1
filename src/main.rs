//! # Autility - 个人音频库统一工具箱
//!
//! 将分散的音频处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `convert` - 批量将 MP4 视频转换为高质量 MP3（ffmpeg）
//! - `download` - 从链接列表批量下载 YouTube 音频（yt-dlp）
//! - `search` - 根据 MP4 文件名批量搜索 YouTube 视频（yt-dlp）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (工作项枚举、分发与统计)
//!   ├── tools/      (外部工具适配器)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod tools;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
