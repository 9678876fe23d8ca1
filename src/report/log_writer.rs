// ==========================================
// 批量附件上传工具 - 输出清单写入器
// ==========================================
// 职责: 追加写入结构化日志行
// 约束: 行内完整、行间原子；跨分块的交错顺序不作保证
// ==========================================

use crate::domain::LogRow;
use csv::Writer;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

/// 输出清单写入错误
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("输出清单创建失败: {0}")]
    CreateError(String),

    #[error("输出清单写入失败: {0}")]
    RowWriteError(String),

    #[error("锁获取失败: {0}")]
    LockError(String),
}

/// 输出清单写入器
///
/// 所有分块共享同一个实例。每次 write_row 持锁写入并刷盘，
/// 保证任何时刻文件里只有完整行。已写入的行不再修改。
pub struct ResultWriter {
    writer: Mutex<Writer<File>>,
}

impl ResultWriter {
    /// 创建输出清单并写入表头
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, WriteError> {
        let file = File::create(path.as_ref())
            .map_err(|e| WriteError::CreateError(e.to_string()))?;
        let mut writer = Writer::from_writer(file);

        writer
            .write_record(LogRow::HEADER)
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| WriteError::RowWriteError(e.to_string()))?;

        Ok(Self {
            writer: Mutex::new(writer),
        })
    }

    /// 追加一行并立即刷盘
    pub fn write_row(&self, row: &LogRow) -> Result<(), WriteError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| WriteError::LockError(e.to_string()))?;

        writer
            .write_record(row.to_record())
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| WriteError::RowWriteError(e.to_string()))
    }
}
