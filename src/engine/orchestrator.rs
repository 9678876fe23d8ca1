// ==========================================
// 批量附件上传工具 - 分块调度器
// ==========================================
// 职责: 每个分组派发一个工作任务，等待全部完成
// 说明: 组内顺序循环处理（非递归）；无取消、无重试
// ==========================================

use crate::domain::{Entry, EntryOutcome, LogRow};
use crate::engine::splitter::split_entries;
use crate::engine::uploader::UploadPipeline;
use crate::report::WriteError;
use anyhow::Context;
use futures::future;
use std::sync::Arc;
use tracing::info;

/// 运行摘要
///
/// 仅用于收尾时的控制台汇总，不影响退出码。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_entries: usize,
    pub done: usize,
    pub files_missing: usize,
    pub not_a_file: usize,
    pub identifier_missing: usize,
    pub transport_errors: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: EntryOutcome) {
        self.total_entries += 1;
        match outcome {
            EntryOutcome::Done => self.done += 1,
            EntryOutcome::SkippedNotFound => self.files_missing += 1,
            EntryOutcome::SkippedNotAFile => self.not_a_file += 1,
            EntryOutcome::SkippedNoIdentifierMatch => self.identifier_missing += 1,
            EntryOutcome::SkippedTransportError => self.transport_errors += 1,
        }
    }

    fn merge(&mut self, other: RunSummary) {
        self.total_entries += other.total_entries;
        self.done += other.done;
        self.files_missing += other.files_missing;
        self.not_a_file += other.not_a_file;
        self.identifier_missing += other.identifier_missing;
        self.transport_errors += other.transport_errors;
    }
}

/// 分块调度器
pub struct Orchestrator {
    pipeline: Arc<UploadPipeline>,
}

impl Orchestrator {
    pub fn new(pipeline: Arc<UploadPipeline>) -> Self {
        Self { pipeline }
    }

    /// 处理一个分组：开始标记 → 顺序循环 → 完成标记
    async fn run_chunk(
        pipeline: Arc<UploadPipeline>,
        chunk_no: Option<usize>,
        entries: Vec<Entry>,
    ) -> Result<RunSummary, WriteError> {
        let start_message = match chunk_no {
            Some(_) => "Starting chunk",
            None => "Starting one chunk",
        };
        info!(chunk = ?chunk_no, entries = entries.len(), "{}", start_message);
        pipeline
            .writer()
            .write_row(&LogRow::chunk_marker(chunk_no, start_message))?;

        let mut summary = RunSummary::default();
        for entry in &entries {
            let outcome = pipeline.process_entry(entry).await?;
            summary.record(outcome);
        }

        info!(chunk = ?chunk_no, "Completed chunk");
        pipeline
            .writer()
            .write_row(&LogRow::chunk_marker(chunk_no, "Completed chunk"))?;
        Ok(summary)
    }

    /// 分发全部分组并等待完成
    pub async fn run(&self, entries: Vec<Entry>) -> anyhow::Result<RunSummary> {
        let chunks = self.pipeline.config().chunks;
        let groups = split_entries(entries, chunks);
        let single_group = groups.len() == 1;

        let tasks: Vec<_> = groups
            .into_iter()
            .enumerate()
            .map(|(chunk_no, group)| {
                let pipeline = Arc::clone(&self.pipeline);
                let marker = if single_group { None } else { Some(chunk_no) };
                tokio::spawn(async move { Self::run_chunk(pipeline, marker, group).await })
            })
            .collect();

        let mut summary = RunSummary::default();
        for chunk_result in future::try_join_all(tasks)
            .await
            .context("分块任务意外终止")?
        {
            summary.merge(chunk_result.context("输出清单写入失败")?);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record_and_merge() {
        let mut a = RunSummary::default();
        a.record(EntryOutcome::Done);
        a.record(EntryOutcome::SkippedNotFound);

        let mut b = RunSummary::default();
        b.record(EntryOutcome::SkippedTransportError);
        b.merge(a);

        assert_eq!(b.total_entries, 3);
        assert_eq!(b.done, 1);
        assert_eq!(b.files_missing, 1);
        assert_eq!(b.transport_errors, 1);
    }
}
