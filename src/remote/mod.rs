// ==========================================
// 批量附件上传工具 - 远程接口层
// ==========================================
// 职责: 记录查询与附件插入两个远程操作的抽象
// 说明: 远程服务仅被消费，不在本工具内重实现；
//       trait 边界用于测试替身。
// ==========================================

pub mod error;
pub mod mime;
pub mod soap;

pub use error::{RemoteError, RemoteResult};
pub use mime::mime_for_filename;
pub use soap::SoapClient;

use crate::domain::ResolvedHandle;
use async_trait::async_trait;

/// 附件插入请求
///
/// name = 文件名":"MIME 类型，source = 表单":"句柄，
/// payload = base64 编码后的文件内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRequest {
    pub agent: String,
    pub topic: String,
    pub name: String,
    pub source: String,
    pub payload: String,
}

impl AttachmentRequest {
    /// 构造附件摄取服务识别的标准请求
    pub fn attachment_creator(filename: &str, table: &str, sysid: &str, payload: String) -> Self {
        let mime = mime_for_filename(filename);
        Self {
            agent: "AttachmentCreator".to_string(),
            topic: "AttachmentCreator".to_string(),
            name: format!("{}:{}", filename, mime),
            source: format!("{}:{}", table, sysid),
            payload,
        }
    }
}

/// 记录查询端点
///
/// 把业务标识翻译成 0..n 个后端记录句柄，返回顺序即远程
/// 返回顺序。
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(&self, identifier: &str) -> RemoteResult<Vec<ResolvedHandle>>;
}

/// 附件插入端点
///
/// 成功时返回远程附件 id（摄取队列记录的 sysid）。
#[async_trait]
pub trait AttachmentSink: Send + Sync {
    async fn insert(&self, request: &AttachmentRequest) -> RemoteResult<String>;
}
