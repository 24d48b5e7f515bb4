/// 一行的切分结果。
///
/// 注意：`Segmented` 里的词保留原行中的写法（大小写不折叠），
/// 残余重建时要在原行里按原文删除。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 从左到右覆盖整行的词序列；空序列表示“无需任何词”（空行）
    Segmented(Vec<String>),
    /// 该行不存在合法切分
    Unsegmented,
}

impl Outcome {
    pub fn is_segmented(&self) -> bool {
        matches!(self, Outcome::Segmented(_))
    }

    /// 成功时返回词序列。
    pub fn words(&self) -> Option<&[String]> {
        match self {
            Outcome::Segmented(words) => Some(words),
            Outcome::Unsegmented => None,
        }
    }
}

/// 单行经过残余重建后的报告（交给 aggregator 汇总）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    /// 命中的已知词（允许重复，去重在最终汇总时做）
    pub words: Vec<String>,
    /// 未被覆盖的残余；切分失败时是整行，残余为空时为 None
    pub residual: Option<String>,
}

/// 整次运行的输出快照：两路流各自排序 + 去重。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    /// 已知词流
    pub known: Vec<String>,
    /// 残余流
    pub residual: Vec<String>,
}
