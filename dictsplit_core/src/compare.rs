//! `compare`：逐行对照词典，找出不是词典词的条目。

use crate::dictionary::Dictionary;

/// 返回所有（trim 后）不在词典中的行，保持输入顺序、不去重。
///
/// 空行 trim 后是空串，永远不在词典中，因此以空条目的形式出现在结果里。
pub fn unknown_words<'a, D, I>(lines: I, dict: &D) -> Vec<String>
where
    D: Dictionary + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !dict.contains(&line.to_lowercase()))
        .map(str::to_owned)
        .collect()
}
