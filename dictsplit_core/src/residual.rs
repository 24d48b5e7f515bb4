//! `residual`：根据切分结果重建“未被覆盖的残余”。
//!
//! - 切分失败：整行原样（含首尾空白）进入残余流，不产出任何已知词
//! - 切分成功：词序列全部进入已知词流；残余 = 去掉首尾空白的行依次删除每个词的**第一处**剩余出现
//!   （同一个词在 W 中出现几次就删几次，按 W 的顺序）

use crate::model::{LineReport, Outcome};

/// 把一行的 `Outcome` 转成 `LineReport`。
///
/// `raw` 是未 trim 的原行（已去掉行尾换行符），`outcome` 是对 `raw.trim()` 的切分结果。
pub fn reconstruct(raw: &str, outcome: Outcome) -> LineReport {
    match outcome {
        Outcome::Unsegmented => LineReport {
            words: Vec::new(),
            residual: Some(raw.to_owned()),
        },
        Outcome::Segmented(words) => {
            let rest = strip_words(raw.trim(), &words);
            LineReport {
                words,
                residual: (!rest.is_empty()).then_some(rest),
            }
        }
    }
}

fn strip_words(line: &str, words: &[String]) -> String {
    let mut rest = line.to_owned();
    for word in words {
        if let Some(pos) = rest.find(word.as_str()) {
            rest.replace_range(pos..pos + word.len(), "");
        }
    }
    rest
}
