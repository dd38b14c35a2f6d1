//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 模块使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印批处理步骤前缀 (如 `[3/12] Converting intro.mp4`)
pub fn print_step(current: usize, total: usize, msg: &str) {
    println!(
        "{} {}",
        format!("[{}/{}]", current, total).cyan().bold(),
        msg
    );
}

/// 打印缩进的补充信息行
pub fn print_detail(msg: &str) {
    println!("    {}", msg.dimmed());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印统计摘要表格
pub fn print_stats(rows: &[(&str, usize)]) {
    #[derive(Tabled)]
    struct StatRow {
        #[tabled(rename = "Metric")]
        metric: String,
        #[tabled(rename = "Count")]
        count: usize,
    }

    let rows: Vec<StatRow> = rows
        .iter()
        .map(|(metric, count)| StatRow {
            metric: metric.to_string(),
            count: *count,
        })
        .collect();

    print_header("Summary");
    println!("{}", Table::new(&rows));
}
