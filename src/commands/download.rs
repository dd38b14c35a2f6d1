//! # download 命令实现
//!
//! 从链接列表文件批量下载 YouTube 音频为 MP3。
//!
//! ## 功能
//! - 分发前检查 yt-dlp 可用性（缺失则致命终止）
//! - 读取链接文件，跳过注释与不合规行
//! - 严格串行下载，单项失败不中断批次
//! - 失败链接写入 failed_downloads.txt 以便重试
//!
//! ## 依赖关系
//! - 使用 `cli/download.rs` 定义的参数
//! - 使用 `batch/`, `tools/ytdlp.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{collector, BatchRunner};
use crate::cli::download::DownloadArgs;
use crate::error::{AutilityError, Result};
use crate::tools::ytdlp;
use crate::utils::{output, progress};

use std::fs;

/// 失败链接清单文件名（写入当前工作目录）
const FAILED_LINKS_FILE: &str = "failed_downloads.txt";

/// 执行 download 命令
pub fn execute(args: DownloadArgs) -> Result<()> {
    output::print_header("YouTube to MP3 Download");

    // 工具缺失对整个批次致命，在枚举之前检测一次
    ytdlp::check_available()?;

    // 验证链接文件
    if !args.links_file.exists() {
        return Err(AutilityError::FileNotFound {
            path: args.links_file.display().to_string(),
        });
    }

    fs::create_dir_all(&args.output).map_err(|e| AutilityError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 读取链接；零有效链接视为致命
    let links = collector::read_links(&args.links_file)?;

    if links.is_empty() {
        return Err(AutilityError::NoValidLinks {
            path: args.links_file.display().to_string(),
        });
    }

    output::print_info(&format!("Links file: {}", args.links_file.display()));
    output::print_info(&format!("Output directory: {}", args.output.display()));
    output::print_info(&format!("Links to download: {}", links.len()));
    output::print_separator();

    // 下载始终串行，无内部并行
    let total = links.len();
    let runner = BatchRunner::new(1);
    let stats = runner.run_sequential(links, |i, url| {
        output::print_step(i, total, "Downloading");
        output::print_detail(url);

        let spinner = progress::create_spinner("yt-dlp");
        let outcome = ytdlp::download(url, &args.output);
        spinner.finish_and_clear();

        outcome
    });

    output::print_stats(&[
        ("Total", stats.total()),
        ("Success", stats.success),
        ("Failed", stats.failed),
    ]);
    output::print_info(&format!("MP3 files in: {}", args.output.display()));

    if !stats.failures.is_empty() {
        output::print_warning("Failed links:");
        for outcome in &stats.failures {
            output::print_detail(&format!("- {}", outcome.item));
        }

        write_failed_links(&stats.failures.iter().map(|o| o.item.as_str()).collect::<Vec<_>>())?;
        output::print_info(&format!("Failed links saved to: {}", FAILED_LINKS_FILE));

        return Err(AutilityError::BatchFailed {
            failed: stats.failed,
        });
    }

    output::print_done("Download finished");
    Ok(())
}

/// 将失败链接写入重试清单（覆盖旧内容）
fn write_failed_links(urls: &[&str]) -> Result<()> {
    let mut content = urls.join("\n");
    content.push('\n');

    fs::write(FAILED_LINKS_FILE, content).map_err(|e| AutilityError::FileWriteError {
        path: FAILED_LINKS_FILE.to_string(),
        source: e,
    })
}
