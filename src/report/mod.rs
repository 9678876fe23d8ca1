// ==========================================
// 批量附件上传工具 - 输出清单层
// ==========================================
// 职责: 结构化结果行的追加写入
// ==========================================

pub mod log_writer;

pub use log_writer::{ResultWriter, WriteError};
