//! `dictsplit_core`：纯逻辑层（不做任何 I/O）。
//!
//! 设计目标：
//! - **核心可复用**：CLI/服务端都能复用同一套切分逻辑
//! - **分层清晰**：engine -> segmenter -> residual -> aggregate/filter -> 输出（`Harvest`）
//! - **结果确定**：同样的输入行、词典与最短词长，总是得到同样的输出
pub mod aggregate;
pub mod compare;
pub mod dictionary;
pub mod engine;
pub mod filter;
pub mod model;
pub mod residual;
pub mod segmenter;
