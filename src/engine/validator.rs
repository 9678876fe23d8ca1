// ==========================================
// 批量附件上传工具 - 附件文件校验器
// ==========================================
// 职责: 远程调用前确认附件存在且为常规文件
// 说明: 不重试；瞬时文件系统错误等同于文件不存在
// ==========================================

use std::path::Path;

/// 文件校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCheck {
    /// 存在且为常规文件
    Ok,
    /// 不存在（或元数据不可读）
    NotFound,
    /// 存在但不是常规文件（目录、符号链接等）
    NotAFile,
}

/// 校验附件文件
pub async fn check_attachment(storage_dir: &Path, filename: &str) -> FileCheck {
    let path = storage_dir.join(filename);
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => FileCheck::Ok,
        Ok(_) => FileCheck::NotAFile,
        Err(_) => FileCheck::NotFound,
    }
}
