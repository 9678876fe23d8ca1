// ==========================================
// 批量附件上传工具 - 输入清单层
// ==========================================
// 职责: 把输入清单文件解析为有序条目列表
// 流程: 打开 → 表头定位 → 逐行转换 → 全量返回
// ==========================================

pub mod error;
pub mod file_parser;

pub use error::{ReadError, ReadResult};
pub use file_parser::{CsvParser, ExcelParser, ManifestParser, UniversalManifestParser};
