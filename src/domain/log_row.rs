// ==========================================
// 批量附件上传工具 - 结构化日志行
// ==========================================
// 职责: 输出清单的一行 = 一次事件
// 格式: Type, Line No, Filename, Record Identifier, Message, ECC Sysid, Filesize
// ==========================================

/// 日志行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// 运行过程标记（分块开始/结束）
    Log,
    /// 成功事件（已上传 / dry-run 模拟）
    Info,
    /// 条目级失败（文件缺失、无匹配记录、传输失败）
    Error,
}

impl LogKind {
    pub fn as_str(&self) -> &str {
        match self {
            LogKind::Log => "Log",
            LogKind::Info => "Info",
            LogKind::Error => "Error",
        }
    }
}

/// 结构化日志行
///
/// 追加写入，写入后不再修改。每个条目在所属分块完成前
/// 至少产生一行（成功或失败）。
#[derive(Debug, Clone)]
pub struct LogRow {
    pub kind: LogKind,
    pub line_number: Option<usize>,
    pub filename: String,
    pub record_identifier: String,
    pub message: String,
    /// 远程附件 id（上传成功或 dry-run 命中的句柄）
    pub sysid: Option<String>,
    /// base64 编码后的载荷字节数
    pub filesize: Option<usize>,
}

impl LogRow {
    /// 输出清单表头
    pub const HEADER: [&'static str; 7] = [
        "Type",
        "Line No",
        "Filename",
        "Record Identifier",
        "Message",
        "ECC Sysid",
        "Filesize",
    ];

    /// 分块标记行（Log 类型，文件名/标识留空）
    pub fn chunk_marker(line_number: Option<usize>, message: &str) -> Self {
        Self {
            kind: LogKind::Log,
            line_number,
            filename: String::new(),
            record_identifier: String::new(),
            message: message.to_string(),
            sysid: None,
            filesize: None,
        }
    }

    /// 条目级错误行
    pub fn entry_error(entry: &crate::domain::Entry, message: &str) -> Self {
        Self {
            kind: LogKind::Error,
            line_number: Some(entry.line_number),
            filename: entry.filename.clone(),
            record_identifier: entry.record_identifier.clone(),
            message: message.to_string(),
            sysid: None,
            filesize: None,
        }
    }

    /// 上传成功 / dry-run 模拟行
    pub fn entry_info(
        entry: &crate::domain::Entry,
        message: &str,
        sysid: String,
        filesize: usize,
    ) -> Self {
        Self {
            kind: LogKind::Info,
            line_number: Some(entry.line_number),
            filename: entry.filename.clone(),
            record_identifier: entry.record_identifier.clone(),
            message: message.to_string(),
            sysid: Some(sysid),
            filesize: Some(filesize),
        }
    }

    /// 序列化为 CSV 记录
    pub fn to_record(&self) -> [String; 7] {
        [
            self.kind.as_str().to_string(),
            self.line_number.map(|n| n.to_string()).unwrap_or_default(),
            self.filename.clone(),
            self.record_identifier.clone(),
            self.message.clone(),
            self.sysid.clone().unwrap_or_default(),
            self.filesize.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }
}
