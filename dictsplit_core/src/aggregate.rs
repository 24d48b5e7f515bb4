//! `aggregate`：跨行收集已知词与残余，运行结束时统一排序去重。
//!
//! 排序/去重只在 `finish` 中做一次，不影响任何单行的切分结果。

use crate::filter::{Filter, SortDedup};
use crate::model::{Harvest, LineReport};

/// 输出汇总器：逐行 `push`，最后 `finish` 得到 `Harvest`。
#[derive(Debug, Default)]
pub struct Aggregator<F = SortDedup> {
    known: Vec<String>,
    residual: Vec<String>,
    /// 处理过的行数
    lines: usize,
    /// 整行失败（或有残余）的行数
    unresolved: usize,
    filter: F,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> Aggregator<F>
where
    F: Filter,
{
    /// 使用自定义 filter（默认 `SortDedup`）。
    pub fn with_filter(filter: F) -> Self {
        Self {
            known: Vec::new(),
            residual: Vec::new(),
            lines: 0,
            unresolved: 0,
            filter,
        }
    }

    pub fn push(&mut self, report: LineReport) {
        self.lines += 1;
        self.known.extend(report.words);
        if let Some(rest) = report.residual {
            self.unresolved += 1;
            self.residual.push(rest);
        }
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn unresolved(&self) -> usize {
        self.unresolved
    }

    /// 两路流各自排序 + 去重。
    pub fn finish(self) -> Harvest {
        Harvest {
            known: self.filter.apply(self.known),
            residual: self.filter.apply(self.residual),
        }
    }
}

impl<F> Extend<LineReport> for Aggregator<F>
where
    F: Filter,
{
    fn extend<I: IntoIterator<Item = LineReport>>(&mut self, iter: I) {
        for report in iter {
            self.push(report);
        }
    }
}
