//! `filter`：输出流后处理（排序/去重）。

/// Filter：对整条输出流做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, entries: Vec<String>) -> Vec<String>;
}

/// 默认 filter：按字节序排序后去重（等价于 `sort -u`，不受 locale 影响）。
#[derive(Debug, Clone, Copy, Default)]
pub struct SortDedup;

impl Filter for SortDedup {
    fn apply(&self, mut entries: Vec<String>) -> Vec<String> {
        entries.sort_unstable();
        entries.dedup();
        entries
    }
}
