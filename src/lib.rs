// ==========================================
// 批量附件上传工具 - 核心库
// ==========================================
// 用途: 按清单把本地文件批量附加到远程表单记录
// 流程: 读清单 → 分块 → 校验文件 → 解析句柄 → 上传/模拟
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 条目与日志行
pub mod domain;

// 输入清单层 - 清单解析
pub mod importer;

// 输出清单层 - 结果写入
pub mod report;

// 远程接口层 - 查询与插入端点
pub mod remote;

// 处理引擎层 - 分块/校验/上传/调度
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{AppConfig, ConfigError};
pub use domain::{Entry, EntryOutcome, LogKind, LogRow, ResolvedHandle};
pub use engine::{Orchestrator, RunSummary, UploadPipeline};
pub use importer::{ReadError, UniversalManifestParser};
pub use remote::{AttachmentRequest, AttachmentSink, RecordResolver, RemoteError, SoapClient};
pub use report::ResultWriter;

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
