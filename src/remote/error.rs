// ==========================================
// 批量附件上传工具 - 远程调用错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 远程调用错误
///
/// 任何变体对条目而言都是 TransportError 结局：写一行
/// 结构化 Error 后跳过，不中断所在分块。
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("远程请求失败: {0}")]
    RequestFailed(String),

    #[error("远程返回非成功状态码: {0}")]
    HttpStatus(u16),

    #[error("响应缺少字段: {0}")]
    MissingField(String),

    #[error("响应 count 字段非法: {0}")]
    InvalidCount(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::RequestFailed(err.to_string())
    }
}

/// Result 类型别名
pub type RemoteResult<T> = Result<T, RemoteError>;
