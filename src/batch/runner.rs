//! # 批量执行器
//!
//! 以串行或有界并行方式执行批量任务。
//!
//! ## 功能
//! - 基于 rayon 的有界并行迭代
//! - 串行模式支持固定项间延迟
//! - 单项结果即时打印，失败不中断批次
//! - 结果收集与汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/` 各模块调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印结果
//! - 使用 `rayon` 进行并行执行

use crate::utils::{output, progress};

use rayon::prelude::*;
use std::time::Duration;

/// 并行工作线程数上限
pub const MAX_WORKERS: usize = 50;

/// 单项结果消息的最大长度（字符数）
const MAX_MESSAGE_LEN: usize = 100;

/// 单个工作项的处理结果
///
/// 由适配器恰好产生一次，此后不再变更。
#[derive(Debug, Clone)]
pub struct Outcome {
    /// 工作项标识（文件名或 URL）
    pub item: String,
    /// 是否成功
    pub success: bool,
    /// 诊断消息（截断至 100 字符）
    pub message: String,
}

impl Outcome {
    /// 构造成功结果
    pub fn success(item: impl Into<String>, message: impl Into<String>) -> Self {
        Outcome {
            item: item.into(),
            success: true,
            message: truncate_message(&message.into()),
        }
    }

    /// 构造失败结果
    pub fn failure(item: impl Into<String>, message: impl Into<String>) -> Self {
        Outcome {
            item: item.into(),
            success: false,
            message: truncate_message(&message.into()),
        }
    }
}

/// 截断消息至 MAX_MESSAGE_LEN 字符
fn truncate_message(msg: &str) -> String {
    msg.chars().take(MAX_MESSAGE_LEN).collect()
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchStats {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情（按记录顺序）
    pub failures: Vec<Outcome>,
}

impl BatchStats {
    /// 记录单项结果
    pub fn record(&mut self, outcome: Outcome) {
        if outcome.success {
            self.success += 1;
        } else {
            self.failed += 1;
            self.failures.push(outcome);
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数上限
    workers: usize,
    /// 串行模式下每项之后的固定延迟
    delay: Option<Duration>,
}

impl BatchRunner {
    /// 创建新的批量执行器（workers 为 0 时取 CPU 核数）
    pub fn new(workers: usize) -> Self {
        let workers = if workers == 0 {
            num_cpus::get()
        } else {
            workers
        };
        BatchRunner {
            workers,
            delay: None,
        }
    }

    /// 设置串行模式下每项之后的固定延迟
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// 并行处理工作项列表
    ///
    /// 结果按完成顺序打印，完成顺序与提交顺序无关；
    /// 汇总计数与处理顺序无关。
    pub fn run_parallel<T, F>(&self, items: Vec<T>, process: F) -> BatchStats
    where
        T: Sync,
        F: Fn(&T) -> Outcome + Sync + Send,
    {
        let total = items.len();
        let threads = self.workers.min(total).max(1);
        let pb = progress::create_progress_bar(total as u64, "Processing");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();

        let outcomes: Vec<Outcome> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let outcome = process(item);
                    pb.suspend(|| print_outcome(&outcome));
                    pb.inc(1);
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut stats = BatchStats::default();
        for outcome in outcomes {
            stats.record(outcome);
        }
        stats
    }

    /// 串行处理工作项列表
    ///
    /// 严格按枚举顺序处理；闭包接收从 1 开始的序号，
    /// 以便命令在调用适配器之前打印进度前缀。
    pub fn run_sequential<T, F>(&self, items: Vec<T>, mut process: F) -> BatchStats
    where
        F: FnMut(usize, &T) -> Outcome,
    {
        let mut stats = BatchStats::default();

        for (i, item) in items.iter().enumerate() {
            let outcome = process(i + 1, item);
            print_outcome(&outcome);
            stats.record(outcome);

            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }
        }

        stats
    }
}

/// 打印单项结果
fn print_outcome(outcome: &Outcome) {
    if outcome.success {
        output::print_success(&format!("{} {}", outcome.item, outcome.message));
    } else {
        output::print_error(&format!("{} {}", outcome.item, outcome.message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 模拟适配器：序号为 3 的倍数时失败
    fn fake_outcome(n: usize) -> Outcome {
        if n % 3 == 0 {
            Outcome::failure(format!("item{}", n), "boom")
        } else {
            Outcome::success(format!("item{}", n), "ok")
        }
    }

    #[test]
    fn test_sequential_stats_invariant() {
        let items: Vec<usize> = (1..=10).collect();
        let runner = BatchRunner::new(1);
        let stats = runner.run_sequential(items, |_, n| fake_outcome(*n));

        assert_eq!(stats.total(), 10);
        assert_eq!(stats.success + stats.failed, stats.total());
        assert_eq!(stats.failed, 3); // 3, 6, 9
        assert_eq!(stats.success, 7);
    }

    #[test]
    fn test_sequential_preserves_order() {
        let items: Vec<usize> = (1..=6).collect();
        let mut seen = Vec::new();
        let runner = BatchRunner::new(1);
        runner.run_sequential(items, |i, n| {
            seen.push((i, *n));
            fake_outcome(*n)
        });

        assert_eq!(seen, vec![(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
    }

    #[test]
    fn test_parallel_matches_sequential_aggregates() {
        let items: Vec<usize> = (1..=20).collect();

        let sequential = BatchRunner::new(1).run_sequential(items.clone(), |_, n| fake_outcome(*n));
        let parallel = BatchRunner::new(4).run_parallel(items, |n| fake_outcome(*n));

        assert_eq!(parallel.total(), sequential.total());
        assert_eq!(parallel.success, sequential.success);
        assert_eq!(parallel.failed, sequential.failed);
    }

    #[test]
    fn test_parallel_collects_all_failures() {
        let items: Vec<usize> = (1..=9).collect();
        let stats = BatchRunner::new(4).run_parallel(items, |n| fake_outcome(*n));

        let mut failed: Vec<String> = stats.failures.iter().map(|o| o.item.clone()).collect();
        failed.sort();
        assert_eq!(failed, vec!["item3", "item6", "item9"]);
    }

    #[test]
    fn test_outcome_message_truncated() {
        let outcome = Outcome::failure("x", "e".repeat(500));
        assert_eq!(outcome.message.chars().count(), 100);

        let short = Outcome::success("y", "ok");
        assert_eq!(short.message, "ok");
    }

    #[test]
    fn test_workers_zero_falls_back_to_cpu_count() {
        let runner = BatchRunner::new(0);
        assert!(runner.workers >= 1);
    }
}
