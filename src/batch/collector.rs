//! # 工作项收集器
//!
//! 枚举批处理的工作项列表。
//!
//! ## 功能
//! - 列举目录中的 MP4 视频文件（不递归）
//! - 从文本文件读取 YouTube 链接（跳过注释与空行）
//! - 从文件名构造搜索关键词
//!
//! ## 依赖关系
//! - 被 `commands/` 各模块调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配扩展名
//! - 使用 `regex` 清洗搜索关键词

use crate::error::{AutilityError, Result};

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 视频扩展名模式（区分大小写，两种常见写法）
const VIDEO_PATTERNS: [&str; 2] = ["*.mp4", "*.MP4"];

/// 收集目录中的 MP4 文件
///
/// 仅列举一级目录项，按文件名排序并去重
/// （大小写不敏感的文件系统会让两种模式命中同一文件）。
pub fn collect_videos(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(is_video_name)
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files.dedup();
    files
}

/// 检查文件名是否匹配视频扩展名模式
fn is_video_name(name: &str) -> bool {
    VIDEO_PATTERNS
        .iter()
        .any(|p| glob::Pattern::new(p).unwrap().matches(name))
}

/// 从文本文件读取 YouTube 链接列表
///
/// 不合规的行被静默跳过，不视为错误。
pub fn read_links(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| AutilityError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut links = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| AutilityError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        if let Some(link) = accept_link(&line) {
            links.push(link.to_string());
        }
    }

    Ok(links)
}

/// 判定一行是否为可接受的 YouTube 链接
///
/// 接受条件：去除首尾空白后非空、不以 `#` 开头、
/// 且包含完整 watch 路径或短链接主机名。
fn accept_link(line: &str) -> Option<&str> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if line.contains("youtube.com/watch") || line.contains("youtu.be/") {
        Some(line)
    } else {
        None
    }
}

/// 从文件名构造搜索关键词
///
/// 去除扩展名，丢弃非 ASCII 字符（emoji 等），
/// 将下划线、连字符、句点、括号的连续串替换为单个空格，
/// 最后折叠空白并去除首尾空白。
pub fn clean_query(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    let ascii: String = stem.chars().filter(|c| c.is_ascii()).collect();

    let punct = Regex::new(r"[_\-.()\[\]]+").unwrap();
    let spaced = punct.replace_all(&ascii, " ");

    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(&spaced, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_link() {
        assert_eq!(
            accept_link("https://youtu.be/abc123"),
            Some("https://youtu.be/abc123")
        );
        assert_eq!(
            accept_link("  https://www.youtube.com/watch?v=abc123  "),
            Some("https://www.youtube.com/watch?v=abc123")
        );

        // 注释、空行与非链接行均被跳过
        assert_eq!(accept_link("# https://youtu.be/abc123"), None);
        assert_eq!(accept_link("not a url"), None);
        assert_eq!(accept_link(""), None);
        assert_eq!(accept_link("   "), None);
        assert_eq!(accept_link("https://example.com/watch?v=abc"), None);
    }

    #[test]
    fn test_is_video_name() {
        assert!(is_video_name("movie.mp4"));
        assert!(is_video_name("movie.MP4"));
        assert!(!is_video_name("movie.Mp4"));
        assert!(!is_video_name("movie.mkv"));
        assert!(!is_video_name("movie.mp3"));
        assert!(!is_video_name("mp4"));
    }

    #[test]
    fn test_clean_query_punctuation_runs() {
        assert_eq!(clean_query("My_Video (2023).mp4"), "My Video 2023");
        assert_eq!(clean_query("a - b [live].MP4"), "a b live");
        assert_eq!(clean_query("track.01.intro.mp4"), "track 01 intro");
    }

    #[test]
    fn test_clean_query_drops_non_ascii() {
        assert_eq!(clean_query("🎵 Song.mp4"), "Song");
        assert_eq!(clean_query("Chanson d'été.mp4"), "Chanson d't");
    }

    #[test]
    fn test_clean_query_collapses_whitespace() {
        assert_eq!(clean_query("a   b\t c.mp4"), "a b c");
        assert_eq!(clean_query("  padded  .mp4"), "padded");
    }
}
