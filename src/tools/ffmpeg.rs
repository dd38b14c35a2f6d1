//! # FFmpeg 适配器
//!
//! 调用外部 `ffmpeg` 将单个视频文件转换为 MP3。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/runner.rs` 的 Outcome

use crate::batch::Outcome;
use crate::error::{AutilityError, Result};

use std::path::Path;
use std::process::{Command, Stdio};

/// ffmpeg 缺失时的安装指引
const INSTALL_HINT: &str = "Install:\n  - Ubuntu/Debian: sudo apt install ffmpeg\n  - macOS: brew install ffmpeg\n  - Windows: download from https://ffmpeg.org/download.html";

/// 检查 ffmpeg 是否在 PATH 中可用
///
/// 在分发开始之前调用一次；缺失时整个批次致命终止。
pub fn check_available() -> Result<()> {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|_| ())
        .map_err(|_| AutilityError::CommandNotFound {
            command: "ffmpeg".to_string(),
            hint: INSTALL_HINT.to_string(),
        })
}

/// 将单个视频文件转换为 MP3
///
/// 固定参数：仅音频、libmp3lame 编码、双声道、最佳 VBR 质量、
/// 无条件覆盖已存在的输出文件。
pub fn convert(input: &Path, output_dir: &Path, bitrate: &str, sample_rate: u32) -> Outcome {
    let name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<invalid>")
        .to_string();
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    let output = output_dir.join(format!("{}.mp3", stem));
    let rate = sample_rate.to_string();

    let result = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .args([
            "-vn",
            "-acodec",
            "libmp3lame",
            "-ab",
            bitrate,
            "-ar",
            &rate,
            "-ac",
            "2",
            "-q:a",
            "0",
            "-y",
        ])
        .arg(&output)
        .output();

    match result {
        Ok(out) if out.status.success() => Outcome::success(name, format!("-> {}.mp3", stem)),
        Ok(out) => Outcome::failure(name, stderr_message(&out.stderr)),
        Err(e) => Outcome::failure(name, e.to_string()),
    }
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
