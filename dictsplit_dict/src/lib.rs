use std::{
    collections::HashSet,
    fs,
    io,
    path::{Path, PathBuf},
};

use dictsplit_core::dictionary::Dictionary;
use log::debug;
use thiserror::Error;

/// 内置英文词表（每行一个小写词）。
static BUILTIN_WORDS: &str = include_str!("../asset/words.txt");

#[derive(Debug, Error)]
pub enum DictError {
    #[error("无法读取词典 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 词表词典：一行一个词。
///
/// - 每行 trim 后折叠为小写
/// - 空行跳过，其余内容（包括 `#` 开头的词条）原样保留
/// - 文件中的非法 UTF-8 字节替换为 U+FFFD，不中断加载
/// - 重复词条合并
pub struct WordList {
    words: HashSet<String>,
    /// 最长词条的字符数（给 segmenter 限定扫描范围）
    longest: usize,
}

impl WordList {
    /// 内置语料。
    pub fn builtin() -> Self {
        let list = Self::from_str(BUILTIN_WORDS);
        debug!("builtin word list: {} words", list.len());
        list
    }

    /// 用户词表文件。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| DictError::Io {
            path: path.to_path_buf(),
            source,
        };
        let bytes = fs::read(path).map_err(io_err)?;
        let list = Self::from_str(&String::from_utf8_lossy(&bytes));
        debug!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let mut list = Self::empty();
        for line in s.lines() {
            list.insert(line);
        }
        list
    }

    fn empty() -> Self {
        Self {
            words: HashSet::new(),
            longest: 0,
        }
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim();
        if word.is_empty() {
            return;
        }
        let word = word.to_lowercase();
        self.longest = self.longest.max(word.chars().count());
        self.words.insert(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    fn longest_word(&self) -> Option<usize> {
        Some(self.longest)
    }
}
