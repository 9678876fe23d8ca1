// ==========================================
// 批量附件上传工具 - 清单解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================
// 约定: 表头为第 1 行，数据行号从 2 起；
//       标识列与文件名列按表头名定位，其余列忽略。
// ==========================================

use crate::domain::Entry;
use crate::importer::error::{ReadError, ReadResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// 清单解析器
///
/// 一次性把整个清单读成条目列表。任何一行失败都会使整次
/// 读取失败，由调用方决定终止运行。
pub trait ManifestParser {
    fn parse_entries(
        &self,
        file_path: &Path,
        id_column: &str,
        file_column: &str,
    ) -> ReadResult<Vec<Entry>>;
}

/// 在表头中定位两个必需列
fn locate_columns(
    headers: &[String],
    id_column: &str,
    file_column: &str,
) -> ReadResult<(usize, usize)> {
    let id_idx = headers
        .iter()
        .position(|h| h == id_column)
        .ok_or_else(|| ReadError::MissingColumn(id_column.to_string()))?;
    let file_idx = headers
        .iter()
        .position(|h| h == file_column)
        .ok_or_else(|| ReadError::MissingColumn(file_column.to_string()))?;
    Ok((id_idx, file_idx))
}

/// 把一个数据行转换为条目
///
/// 完全空白的行返回 None（行号仍然占用）。
fn row_to_entry(
    cells: &[String],
    line_number: usize,
    id_idx: usize,
    file_idx: usize,
    id_column: &str,
    file_column: &str,
) -> ReadResult<Option<Entry>> {
    if cells.iter().all(|v| v.is_empty()) {
        return Ok(None);
    }

    let identifier = cells
        .get(id_idx)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ReadError::MissingField {
            row: line_number,
            column: id_column.to_string(),
        })?;
    let filename = cells
        .get(file_idx)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ReadError::MissingField {
            row: line_number,
            column: file_column.to_string(),
        })?;

    Ok(Some(Entry::new(
        line_number,
        identifier.clone(),
        filename.clone(),
    )))
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl ManifestParser for CsvParser {
    fn parse_entries(
        &self,
        file_path: &Path,
        id_column: &str,
        file_column: &str,
    ) -> ReadResult<Vec<Entry>> {
        if !file_path.exists() {
            return Err(ReadError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .quote(b'"')
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let (id_idx, file_idx) = locate_columns(&headers, id_column, file_column)?;

        let mut entries = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let cells: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // 表头占第 1 行，数据行号从 2 起
            let line_number = row_idx + 2;
            if let Some(entry) =
                row_to_entry(&cells, line_number, id_idx, file_idx, id_column, file_column)?
            {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ManifestParser for ExcelParser {
    fn parse_entries(
        &self,
        file_path: &Path,
        id_column: &str,
        file_column: &str,
    ) -> ReadResult<Vec<Entry>> {
        if !file_path.exists() {
            return Err(ReadError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ReadError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ReadError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ReadError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ReadError::ExcelParseError("Excel 文件无数据行".to_string()))?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
        let (id_idx, file_idx) = locate_columns(&headers, id_column, file_column)?;

        let mut entries = Vec::new();
        for (row_idx, data_row) in rows.enumerate() {
            let cells: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            let line_number = row_idx + 2;
            if let Some(entry) =
                row_to_entry(&cells, line_number, id_idx, file_idx, id_column, file_column)?
            {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

// ==========================================
// 通用清单解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalManifestParser;

impl UniversalManifestParser {
    pub fn parse<P: AsRef<Path>>(
        &self,
        file_path: P,
        id_column: &str,
        file_column: &str,
    ) -> ReadResult<Vec<Entry>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_entries(path, id_column, file_column),
            "xlsx" | "xls" => ExcelParser.parse_entries(path, id_column, file_column),
            _ => Err(ReadError::UnsupportedFormat(ext)),
        }
    }
}
