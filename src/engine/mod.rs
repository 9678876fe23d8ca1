// ==========================================
// 批量附件上传工具 - 处理引擎层
// ==========================================
// 职责: 分块、校验、条目流水线与调度
// ==========================================

pub mod orchestrator;
pub mod splitter;
pub mod uploader;
pub mod validator;

pub use orchestrator::{Orchestrator, RunSummary};
pub use splitter::split_entries;
pub use uploader::UploadPipeline;
pub use validator::{check_attachment, FileCheck};
