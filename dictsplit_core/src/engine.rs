use rayon::prelude::*;

use crate::aggregate::Aggregator;
use crate::dictionary::Dictionary;
use crate::model::{Harvest, LineReport, Outcome};
use crate::residual;
use crate::segmenter::{DEFAULT_MIN_WORD_LENGTH, Segmenter};

/// 引擎：负责把输入行编排成最终的 `Harvest`。
///
/// 流水线：
/// - engine（编排） -> segmenter（最长匹配切分） -> residual（残余重建） -> aggregate/filter（排序去重） -> 输出 Harvest
///
/// 每一行只依赖自身和只读词典，所以 `parallel(true)` 时按行分片到 rayon 线程池，
/// 结果按输入顺序收齐后再做唯一一次排序去重。
pub struct Engine<D> {
    /// 词典（运行期间只读）
    dictionary: D,
    /// 最短词长（字符数）
    min_word_length: usize,
    /// 是否按行并行
    parallel: bool,
}

impl<D> Engine<D>
where
    D: Dictionary,
{
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            parallel: false,
        }
    }

    /// 设置最短词长；0 按 1 处理。
    pub fn min_word_length(mut self, n: usize) -> Self {
        self.min_word_length = n.max(1);
        self
    }

    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    fn segmenter(&self) -> Segmenter<'_, D> {
        Segmenter::new(&self.dictionary).min_word_length(self.min_word_length)
    }

    /// 只切分，不做残余重建。
    pub fn segment(&self, line: &str) -> Outcome {
        self.segmenter().segment(line)
    }

    /// 处理单行：对去掉首尾空白的内容切分，再做残余重建。
    ///
    /// 切分失败时残余是未 trim 的原行。
    pub fn process_line(&self, raw: &str) -> LineReport {
        residual::reconstruct(raw, self.segment(raw.trim()))
    }

    /// 处理整批输入行，返回排序去重后的两路输出。
    pub fn run<S>(&self, lines: &[S]) -> Harvest
    where
        S: AsRef<str> + Sync,
    {
        let mut aggregator = Aggregator::new();
        self.collect_into(lines, &mut aggregator);
        aggregator.finish()
    }

    /// 处理整批输入行并写入调用方提供的 aggregator（便于读取统计信息）。
    pub fn collect_into<S>(&self, lines: &[S], aggregator: &mut Aggregator)
    where
        S: AsRef<str> + Sync,
    {
        if self.parallel {
            let reports: Vec<LineReport> = lines
                .par_iter()
                .map(|line| self.process_line(line.as_ref()))
                .collect();
            aggregator.extend(reports);
        } else {
            aggregator.extend(lines.iter().map(|line| self.process_line(line.as_ref())));
        }
    }
}
