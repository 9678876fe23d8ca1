// ==========================================
// 批量附件上传工具 - 条目处理流水线
// ==========================================
// 职责: 单个条目的 校验 → 解析 → 逐句柄上传
// 策略: 任何条目级失败只写日志行并前进，不中断分块
// ==========================================

use crate::config::AppConfig;
use crate::domain::{Entry, EntryOutcome, LogRow};
use crate::engine::validator::{check_attachment, FileCheck};
use crate::remote::{AttachmentRequest, AttachmentSink, RecordResolver};
use crate::report::{ResultWriter, WriteError};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::Arc;
use tracing::{error, info, warn};

/// 上传流水线
///
/// 所有分块共享一个实例：配置与输出写入器共享，远程端点
/// 通过 trait 对象注入，测试时可替换为内存桩。
pub struct UploadPipeline {
    config: Arc<AppConfig>,
    resolver: Arc<dyn RecordResolver>,
    sink: Arc<dyn AttachmentSink>,
    writer: Arc<ResultWriter>,
}

impl UploadPipeline {
    pub fn new(
        config: Arc<AppConfig>,
        resolver: Arc<dyn RecordResolver>,
        sink: Arc<dyn AttachmentSink>,
        writer: Arc<ResultWriter>,
    ) -> Self {
        Self {
            config,
            resolver,
            sink,
            writer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn writer(&self) -> &ResultWriter {
        &self.writer
    }

    /// 处理单个条目并返回终态
    ///
    /// 状态机: Validated → Resolved → Uploading(h)* → Done。
    /// 输出写入失败视为致命错误向上传播（日志行不允许丢失）。
    pub async fn process_entry(&self, entry: &Entry) -> Result<EntryOutcome, WriteError> {
        // 1. 文件校验
        match check_attachment(&self.config.storage_dir, &entry.filename).await {
            FileCheck::Ok => {}
            FileCheck::NotFound => {
                warn!(line = entry.line_number, file = %entry.filename, "文件不存在");
                self.writer
                    .write_row(&LogRow::entry_error(entry, "File not found"))?;
                return Ok(EntryOutcome::SkippedNotFound);
            }
            FileCheck::NotAFile => {
                warn!(line = entry.line_number, file = %entry.filename, "不是常规文件");
                self.writer
                    .write_row(&LogRow::entry_error(entry, "Not a file"))?;
                return Ok(EntryOutcome::SkippedNotAFile);
            }
        }

        // 2. 标识解析
        let handles = match self.resolver.resolve(&entry.record_identifier).await {
            Ok(handles) => handles,
            Err(e) => {
                error!(line = entry.line_number, id = %entry.record_identifier, %e, "记录查询失败");
                self.writer.write_row(&LogRow::entry_error(
                    entry,
                    &format!("Transport error: {}", e),
                ))?;
                return Ok(EntryOutcome::SkippedTransportError);
            }
        };

        if handles.is_empty() {
            warn!(line = entry.line_number, id = %entry.record_identifier, "无匹配记录");
            self.writer
                .write_row(&LogRow::entry_error(entry, "Record identifier not found"))?;
            return Ok(EntryOutcome::SkippedNoIdentifierMatch);
        }

        // 3. 读文件并编码
        let path = self.config.storage_dir.join(&entry.filename);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                // 校验后文件仍可能被移走，按文件缺失处理
                error!(line = entry.line_number, file = %entry.filename, %e, "文件读取失败");
                self.writer.write_row(&LogRow::entry_error(
                    entry,
                    &format!("File read failed: {}", e),
                ))?;
                return Ok(EntryOutcome::SkippedNotFound);
            }
        };
        let payload = STANDARD.encode(&bytes);

        // 4. 按解析返回顺序逐句柄上传
        for handle in &handles {
            let request = AttachmentRequest::attachment_creator(
                &entry.filename,
                &self.config.table,
                handle.as_str(),
                payload.clone(),
            );

            if self.config.dry_run {
                info!(line = entry.line_number, sysid = %handle.as_str(), size = payload.len(), "dry-run 模拟上传");
                self.writer.write_row(&LogRow::entry_info(
                    entry,
                    "File to be attached",
                    handle.as_str().to_string(),
                    payload.len(),
                ))?;
                continue;
            }

            match self.sink.insert(&request).await {
                Ok(remote_id) => {
                    info!(line = entry.line_number, sysid = %handle.as_str(), remote_id = %remote_id, "附件请求已发送");
                    self.writer.write_row(&LogRow::entry_info(
                        entry,
                        "Attachment request sent",
                        remote_id,
                        payload.len(),
                    ))?;
                }
                Err(e) => {
                    // 单个句柄失败不影响同条目的其余句柄
                    error!(line = entry.line_number, sysid = %handle.as_str(), %e, "附件插入失败");
                    self.writer.write_row(&LogRow::entry_error(
                        entry,
                        &format!("Transport error: {}", e),
                    ))?;
                }
            }
        }

        Ok(EntryOutcome::Done)
    }
}
