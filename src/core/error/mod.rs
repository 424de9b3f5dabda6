//! 统一错误处理
//!
//! 所有错误使用 `thiserror` 派生，`HintResult<T>` 提供统一的返回类型

pub mod hint;

pub use hint::{HintError, HintResult};
