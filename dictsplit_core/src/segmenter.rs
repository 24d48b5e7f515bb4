//! `segmenter`：把一行文本贪心切分为词典词序列。
//!
//! 规则（最长匹配 + 记忆化，单路径，不回退）：
//! - 在偏移 `o` 处只取**最长**的候选词（折叠后在词典中，且字符数 >= `min_word_length`）
//! - 候选词之后的剩余部分失败时，`o` 处直接失败，不会改用更短的候选
//! - 失败沿着递归链向上传播，因此整行要么完整切分，要么整体失败
//!
//! 实现上用从行尾到行首的逆序填表代替递归：每个偏移只计算一次，
//! 计算 `o` 时所有 `e > o` 的结果都已就绪，栈深度与行长无关。

use crate::dictionary::Dictionary;
use crate::model::Outcome;

/// 默认最短词长（字符数）。
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// 记忆表中某个偏移的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// 偏移等于行长：空序列成功
    Done,
    /// 选中 `[o, end)` 作为词，且 `end` 之后可以完整切分
    Word { end: usize },
    /// 从该偏移出发不存在合法切分
    Fail,
}

/// 单行的记忆表：偏移 -> `Step`，随行创建、随行丢弃。
struct Memo {
    steps: Vec<Step>,
}

impl Memo {
    fn new(len: usize) -> Self {
        let mut steps = vec![Step::Fail; len + 1];
        steps[len] = Step::Done;
        Self { steps }
    }

    fn get(&self, offset: usize) -> Step {
        self.steps[offset]
    }

    fn set(&mut self, offset: usize, step: Step) {
        self.steps[offset] = step;
    }

    /// 从偏移 0 沿着 `Word.end` 链回放出词序列。
    fn unwind(&self, line: &str, bounds: &[usize]) -> Outcome {
        let mut words = Vec::new();
        let mut cur = 0;
        loop {
            match self.get(cur) {
                Step::Done => return Outcome::Segmented(words),
                Step::Fail => return Outcome::Unsegmented,
                Step::Word { end } => {
                    words.push(line[bounds[cur]..bounds[end]].to_owned());
                    cur = end;
                }
            }
        }
    }
}

/// 贪心最长匹配切分器；只持有词典引用，可以在多线程间共享。
#[derive(Debug)]
pub struct Segmenter<'a, D: ?Sized> {
    dict: &'a D,
    min_word_length: usize,
}

impl<D: ?Sized> Clone for Segmenter<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Segmenter<'_, D> {}

impl<'a, D> Segmenter<'a, D>
where
    D: Dictionary + ?Sized,
{
    pub fn new(dict: &'a D) -> Self {
        Self {
            dict,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }

    /// 设置最短词长（字符数）；0 与 1 等价。
    pub fn min_word_length(mut self, n: usize) -> Self {
        self.min_word_length = n;
        self
    }

    /// 切分一行。纯函数：相同的 (line, dict, min_word_length) 总是得到相同结果。
    pub fn segment(&self, line: &str) -> Outcome {
        let bounds = char_bounds(line);
        let len = bounds.len() - 1;
        let mut memo = Memo::new(len);

        for offset in (0..len).rev() {
            let step = match self.longest_candidate(line, &bounds, offset) {
                None => Step::Fail,
                Some(end) => match memo.get(end) {
                    // 下游失败：不尝试更短的候选
                    Step::Fail => Step::Fail,
                    Step::Done | Step::Word { .. } => Step::Word { end },
                },
            };
            memo.set(offset, step);
        }

        memo.unwind(line, &bounds)
    }

    /// `offset` 处最长候选词的结束偏移。
    ///
    /// 从长到短扫描，第一个命中即最长；每个结束偏移对应唯一长度，所以不存在并列。
    fn longest_candidate(&self, line: &str, bounds: &[usize], offset: usize) -> Option<usize> {
        let len = bounds.len() - 1;
        // 小写折叠不会减少字符数，超过词典最长词条的子串不可能命中。
        let limit = match self.dict.longest_word() {
            Some(longest) => len.min(offset.saturating_add(longest)),
            None => len,
        };
        let shortest = offset + self.min_word_length.max(1);
        if shortest > limit {
            return None;
        }
        (shortest..=limit).rev().find(|&end| {
            let span = &line[bounds[offset]..bounds[end]];
            self.dict.contains(&span.to_lowercase())
        })
    }
}

/// 便捷接口：一次性切分。
pub fn segment<D>(line: &str, dict: &D, min_word_length: usize) -> Outcome
where
    D: Dictionary + ?Sized,
{
    Segmenter::new(dict).min_word_length(min_word_length).segment(line)
}

/// 字符偏移 -> 字节偏移，末尾追加 `line.len()`。
fn char_bounds(line: &str) -> Vec<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect()
}
