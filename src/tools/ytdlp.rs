//! # yt-dlp 适配器
//!
//! 调用外部 `yt-dlp` 下载音频或搜索视频。
//!
//! ## 功能
//! - 下载：最佳音轨、提取为 MP3、最高音质、禁用播放列表展开
//! - 搜索：平铺结果、不下载，返回首个结果的 watch 链接
//!
//! ## 依赖关系
//! - 被 `commands/download.rs`, `commands/search.rs` 调用
//! - 使用 `batch/runner.rs` 的 Outcome
//! - 使用 `utils/output.rs` 打印搜索警告

use crate::batch::Outcome;
use crate::error::{AutilityError, Result};
use crate::utils::output;

use std::path::Path;
use std::process::{Command, Stdio};

/// watch 链接前缀
const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// yt-dlp 缺失时的安装指引
const INSTALL_HINT: &str = "Install:\n  - pip install yt-dlp\n  - or download from https://github.com/yt-dlp/yt-dlp";

/// 检查 yt-dlp 是否在 PATH 中可用
///
/// 在分发开始之前调用一次；缺失时整个批次致命终止。
pub fn check_available() -> Result<()> {
    Command::new("yt-dlp")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|_| ())
        .map_err(|_| AutilityError::CommandNotFound {
            command: "yt-dlp".to_string(),
            hint: INSTALL_HINT.to_string(),
        })
}

/// 下载单个链接为 MP3
///
/// 输出文件名由远端标题模板化；播放列表链接最多只下载链接目标本身。
pub fn download(url: &str, output_dir: &Path) -> Outcome {
    let template = output_dir.join("%(title)s.%(ext)s");

    let result = Command::new("yt-dlp")
        .args([
            "-f",
            "bestaudio",
            "--extract-audio",
            "--audio-format",
            "mp3",
            "--audio-quality",
            "0",
            "-o",
        ])
        .arg(&template)
        .arg("--no-playlist")
        .arg(url)
        .output();

    match result {
        Ok(out) if out.status.success() => Outcome::success(url, "OK"),
        Ok(out) => Outcome::failure(url, stderr_message(&out.stderr)),
        Err(e) => Outcome::failure(url, e.to_string()),
    }
}

/// 搜索并返回最佳匹配的 watch 链接
///
/// 任何错误（进程启动失败、非零退出、空输出）都被捕获，
/// 打印警告后按"无结果"处理——单个坏查询不会中断批次。
pub fn search(query: &str, max_results: usize) -> Option<String> {
    let result = Command::new("yt-dlp")
        .arg(format!("ytsearch{}:{}", max_results, query))
        .args([
            "--flat-playlist",
            "--skip-download",
            "--no-warnings",
            "--print",
            "id",
        ])
        .output();

    match result {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            stdout
                .lines()
                .next()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(watch_url)
        }
        Ok(out) => {
            output::print_warning(&format!("Search error: {}", stderr_message(&out.stderr)));
            None
        }
        Err(e) => {
            output::print_warning(&format!("Search error: {}", e));
            None
        }
    }
}

/// 由视频标识构造规范 watch 链接
fn watch_url(id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, id)
}

/// 从 stderr 提取诊断消息
fn stderr_message(stderr: &[u8]) -> String {
    let msg = String::from_utf8_lossy(stderr).trim().to_string();
    if msg.is_empty() {
        "unknown error".to_string()
    } else {
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("abc123"),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn test_stderr_message_fallback() {
        assert_eq!(stderr_message(b""), "unknown error");
        assert_eq!(stderr_message(b"  ERROR: no video  \n"), "ERROR: no video");
    }
}
