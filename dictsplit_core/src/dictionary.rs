use std::collections::HashSet;

/// 词典抽象：core 不关心词典来自文件/内置语料/内存。
///
/// 约定：
/// - 词典内容在加载时已经做过 trim + 小写折叠，运行期间只读
/// - `contains` 收到的参数已经由调用方折叠为小写
/// - 实现必须是 O(1) 期望复杂度（通常是哈希集合）
pub trait Dictionary: Send + Sync {
    /// 查询一个已折叠的词是否在词典中。
    fn contains(&self, folded: &str) -> bool;

    /// 词典中最长词条的字符数；`None` 表示未知（segmenter 会扫描到行尾）。
    fn longest_word(&self) -> Option<usize> {
        None
    }
}

impl Dictionary for HashSet<String> {
    fn contains(&self, folded: &str) -> bool {
        HashSet::contains(self, folded)
    }
}
