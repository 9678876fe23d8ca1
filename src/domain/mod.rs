// ==========================================
// 批量附件上传工具 - 领域类型
// ==========================================
// 职责: 清单条目、句柄解析结果与结构化日志行
// ==========================================

pub mod entry;
pub mod log_row;

pub use entry::{Entry, EntryOutcome, ResolvedHandle};
pub use log_row::{LogKind, LogRow};
