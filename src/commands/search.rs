//! # search 命令实现
//!
//! 根据 MP4 文件名批量搜索 YouTube，保存找到的链接。
//!
//! ## 功能
//! - 文件名清洗为搜索关键词
//! - 串行搜索，每次查询后固定延迟 1 秒以避免远端限流
//! - 写出完整标注清单与仅含链接的副本
//! - 未命中的查询不影响退出状态
//!
//! ## 依赖关系
//! - 使用 `cli/search.rs` 定义的参数
//! - 使用 `batch/`, `tools/ytdlp.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{collector, BatchRunner, Outcome};
use crate::cli::search::SearchArgs;
use crate::error::{AutilityError, Result};
use crate::tools::ytdlp;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 每次查询之后的固定延迟，防止远端限流；不可并行化
const SEARCH_DELAY: Duration = Duration::from_secs(1);

/// 每个查询取的结果数
const MAX_RESULTS: usize = 1;

/// 单个文件的搜索结果
#[derive(Debug, Clone)]
struct SearchResult {
    /// 原始文件名
    filename: String,
    /// 未命中时为 None
    link: Option<String>,
}

/// 执行 search 命令
pub fn execute(args: SearchArgs) -> Result<()> {
    output::print_header("YouTube Search from MP4 File Names");

    // 工具缺失对整个批次致命，在枚举之前检测一次
    ytdlp::check_available()?;

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

    // 枚举文件；零文件对本命令视为致命
    let files = collector::collect_videos(&args.input);

    if files.is_empty() {
        return Err(AutilityError::NoFilesFound {
            path: args.input.display().to_string(),
        });
    }

    output::print_info(&format!("Source directory: {}", args.input.display()));
    output::print_info(&format!("Files found: {}", files.len()));
    output::print_info(&format!("Output file: {}", args.output.display()));
    output::print_separator();

    // 搜索始终串行，并带固定项间延迟
    let total = files.len();
    let mut results: Vec<SearchResult> = Vec::with_capacity(total);

    let runner = BatchRunner::new(1).with_delay(SEARCH_DELAY);
    let stats = runner.run_sequential(files, |i, file| {
        let filename = file
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let query = collector::clean_query(&filename);

        output::print_step(i, total, &format!("Searching: {}", ellipsize(&filename, 50)));
        output::print_detail(&format!("Query: {}", ellipsize(&query, 60)));

        let link = ytdlp::search(&query, MAX_RESULTS);

        let outcome = match &link {
            Some(url) => Outcome::success(filename.clone(), url.clone()),
            None => Outcome::failure(filename.clone(), "not found"),
        };

        results.push(SearchResult { filename, link });
        outcome
    });

    // 写出完整标注清单与仅含链接的副本
    let annotated = render_annotated(&results, &args.input);
    fs::write(&args.output, annotated).map_err(|e| AutilityError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let links_path = links_only_path(&args.output);
    fs::write(&links_path, render_links_only(&results)).map_err(|e| {
        AutilityError::FileWriteError {
            path: links_path.display().to_string(),
            source: e,
        }
    })?;

    output::print_success(&format!("Full listing: {}", args.output.display()));
    output::print_success(&format!("Links only: {}", links_path.display()));

    output::print_stats(&[
        ("Total files", stats.total()),
        ("Links found", stats.success),
        ("Not found", stats.failed),
    ]);

    if stats.failed > 0 {
        output::print_warning("Files without a match:");
        for result in results.iter().filter(|r| r.link.is_none()) {
            output::print_detail(&format!("- {}", ellipsize(&result.filename, 50)));
        }
    }

    // 未命中的查询不是致命条件
    output::print_done("Search finished");
    Ok(())
}

/// 渲染完整标注清单：头部注释块 + 每个输入文件一行
fn render_annotated(results: &[SearchResult], source_dir: &Path) -> String {
    let found = results.iter().filter(|r| r.link.is_some()).count();

    let mut out = String::new();
    out.push_str("# YouTube links\n");
    out.push_str(&format!("# Generated from: {}\n", source_dir.display()));
    out.push_str(&format!("# Total: {} found / {} files\n", found, results.len()));
    out.push_str(&format!("#{}\n\n", "=".repeat(58)));

    for result in results {
        match &result.link {
            Some(link) => out.push_str(&format!("{}\n", link)),
            None => out.push_str(&format!("# NON TROUVÉ: {}\n", result.filename)),
        }
    }

    out
}

/// 渲染仅含已解析链接的清单
fn render_links_only(results: &[SearchResult]) -> String {
    results
        .iter()
        .filter_map(|r| r.link.as_deref())
        .map(|link| format!("{}\n", link))
        .collect()
}

/// 派生 links-only 文件路径：扩展名之前插入 `_links_only`
fn links_only_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("links");

    match output.extension().and_then(|e| e.to_str()) {
        Some(ext) => output.with_file_name(format!("{}_links_only.{}", stem, ext)),
        None => output.with_file_name(format!("{}_links_only", stem)),
    }
}

/// 截断过长的显示文本
fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<SearchResult> {
        vec![
            SearchResult {
                filename: "one.mp4".to_string(),
                link: Some("https://www.youtube.com/watch?v=aaa".to_string()),
            },
            SearchResult {
                filename: "two.mp4".to_string(),
                link: None,
            },
            SearchResult {
                filename: "three.mp4".to_string(),
                link: Some("https://www.youtube.com/watch?v=ccc".to_string()),
            },
        ]
    }

    #[test]
    fn test_render_annotated() {
        let text = render_annotated(&sample_results(), Path::new("/videos"));

        assert!(text.contains("# Generated from: /videos"));
        assert!(text.contains("# Total: 2 found / 3 files"));
        assert!(text.contains("https://www.youtube.com/watch?v=aaa\n"));
        assert!(text.contains("# NON TROUVÉ: two.mp4\n"));
        assert!(text.contains("https://www.youtube.com/watch?v=ccc\n"));
    }

    #[test]
    fn test_render_links_only_omits_misses() {
        let text = render_links_only(&sample_results());

        assert_eq!(
            text,
            "https://www.youtube.com/watch?v=aaa\nhttps://www.youtube.com/watch?v=ccc\n"
        );
        assert!(!text.contains("two.mp4"));
    }

    #[test]
    fn test_links_only_path() {
        assert_eq!(
            links_only_path(Path::new("youtube_links.txt")),
            PathBuf::from("youtube_links_links_only.txt")
        );
        assert_eq!(
            links_only_path(Path::new("out/list.of.links.txt")),
            PathBuf::from("out/list.of.links_links_only.txt")
        );
        assert_eq!(
            links_only_path(Path::new("links")),
            PathBuf::from("links_links_only")
        );
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("short", 10), "short");
        assert_eq!(ellipsize("exactly_10", 10), "exactly_10");
        assert_eq!(ellipsize("a_rather_long_name", 10), "a_rather_l...");
    }
}
