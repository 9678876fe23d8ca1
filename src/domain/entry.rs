// ==========================================
// 批量附件上传工具 - 清单条目
// ==========================================
// 职责: 输入清单的一行 = 一个待处理条目
// ==========================================

/// 清单条目
///
/// 由输入清单的一个数据行解析而来，创建后不再修改。
/// 每个条目在一次运行中恰好被处理一次，所有权随分块转移。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 物理行号（表头为第 1 行，数据行从 2 起）
    pub line_number: usize,
    /// 业务记录标识（清单第一列）
    pub record_identifier: String,
    /// 附件文件名（清单第二列，相对于存储目录）
    pub filename: String,
}

impl Entry {
    pub fn new(line_number: usize, record_identifier: String, filename: String) -> Self {
        Self {
            line_number,
            record_identifier,
            filename,
        }
    }
}

/// 后端记录句柄（sysid）
///
/// 同一个业务标识可能解析出 0/1/多个句柄，仅在单个条目
/// 的上传循环内使用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHandle(pub String);

impl ResolvedHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 条目终态
///
/// 状态机: Validated → Resolved → Uploading(h)* → Done，
/// 任一环节失败即进入对应 Skipped 终态，不回退、不重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// 附件文件不存在
    SkippedNotFound,
    /// 路径存在但不是常规文件
    SkippedNotAFile,
    /// 远程查询无匹配记录
    SkippedNoIdentifierMatch,
    /// 远程调用失败（查询阶段）
    SkippedTransportError,
    /// 全部句柄处理完毕（含 dry-run 模拟）
    Done,
}
