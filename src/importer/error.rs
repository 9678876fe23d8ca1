// ==========================================
// 批量附件上传工具 - 输入清单错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 输入清单读取错误
///
/// 清单读取是全有或全无：任一行解析失败即放弃整个读取，
/// 已产出的部分结果不会进入后续流程。
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("清单文件不存在: {0}")]
    FileNotFound(String),

    #[error("清单格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("清单读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("表头缺少必需列: {0}")]
    MissingColumn(String),

    #[error("数据行缺少字段 (行 {row}, 列 {column})")]
    MissingField { row: usize, column: String },
}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        ReadError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ReadError {
    fn from(err: csv::Error) -> Self {
        ReadError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ReadError {
    fn from(err: calamine::Error) -> Self {
        ReadError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ReadResult<T> = Result<T, ReadError>;
