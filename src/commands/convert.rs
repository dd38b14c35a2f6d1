//! # convert 命令实现
//!
//! 批量将目录中的 MP4 文件转换为高质量 MP3。
//!
//! ## 功能
//! - 分发前检查 ffmpeg 可用性（缺失则致命终止）
//! - 枚举一级目录中的 MP4 文件
//! - 默认有界并行转换，可用 --sequential 强制串行
//! - 汇总统计，存在失败项时以非零状态退出
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `tools/ffmpeg.rs`
//! - 使用 `utils/output.rs`

use crate::batch::runner::MAX_WORKERS;
use crate::batch::{collector, BatchRunner};
use crate::cli::convert::ConvertArgs;
use crate::error::{AutilityError, Result};
use crate::tools::ffmpeg;
use crate::utils::output;

use std::fs;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("MP4 to MP3 Conversion");

    // 工具缺失对整个批次致命，在枚举之前检测一次
    ffmpeg::check_available()?;
    output::print_info("ffmpeg detected");

    // 验证输入目录
    if !args.input.exists() {
        return Err(AutilityError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }
    if !args.input.is_dir() {
        return Err(AutilityError::NotADirectory {
            path: args.input.display().to_string(),
        });
    }

    // 输出目录默认为 <input>/mp3_output
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.join("mp3_output"));

    fs::create_dir_all(&output_dir).map_err(|e| AutilityError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    // 枚举待转换文件；空批次不是错误
    let files = collector::collect_videos(&args.input);

    if files.is_empty() {
        output::print_warning(&format!(
            "No MP4 files found in '{}'",
            args.input.display()
        ));
        return Ok(());
    }

    let parallel = !args.sequential && files.len() > 1;

    output::print_info(&format!("Source directory: {}", args.input.display()));
    output::print_info(&format!("Output directory: {}", output_dir.display()));
    output::print_info(&format!("Files to convert: {}", files.len()));
    output::print_info(&format!(
        "Quality: {} @ {} Hz",
        args.bitrate, args.sample_rate
    ));
    output::print_info(if parallel {
        "Parallel mode"
    } else {
        "Sequential mode"
    });
    output::print_separator();

    let runner = BatchRunner::new(MAX_WORKERS);

    let stats = if parallel {
        runner.run_parallel(files, |file| {
            ffmpeg::convert(file, &output_dir, &args.bitrate, args.sample_rate)
        })
    } else {
        let total = files.len();
        runner.run_sequential(files, |i, file| {
            let name = file
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            output::print_step(i, total, &format!("Converting {}", name));
            ffmpeg::convert(file, &output_dir, &args.bitrate, args.sample_rate)
        })
    };

    output::print_stats(&[
        ("Total", stats.total()),
        ("Success", stats.success),
        ("Failed", stats.failed),
    ]);

    if stats.failed > 0 {
        return Err(AutilityError::BatchFailed {
            failed: stats.failed,
        });
    }

    output::print_done("Conversion finished");
    Ok(())
}
