// ==========================================
// 测试辅助函数
// ==========================================
// 提供: 测试配置、内存远程桩、清单生成
// ==========================================
#![allow(dead_code)]

use async_trait::async_trait;
use bulk_attach::remote::{AttachmentRequest, AttachmentSink, RecordResolver, RemoteResult};
use bulk_attach::{AppConfig, ResolvedHandle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 构造测试配置
pub fn test_config(storage_dir: &Path, input: &Path, output: &Path, dry_run: bool) -> AppConfig {
    AppConfig {
        storage_dir: storage_dir.to_path_buf(),
        instance_url: "https://demo.example.com".to_string(),
        username: "attachment_user".to_string(),
        password: "attachment_password".to_string(),
        table: "ast_contract".to_string(),
        record_field: "u_uniqueid".to_string(),
        input_file: input.to_path_buf(),
        output_file: output.to_path_buf(),
        dry_run,
        chunks: 20,
        id_column: "uniqueid".to_string(),
        file_column: "file".to_string(),
    }
}

/// 查表式解析桩：标识 → 句柄列表（缺失 = 无匹配）
pub struct MapResolver {
    handles: HashMap<String, Vec<String>>,
}

impl MapResolver {
    pub fn new(pairs: &[(&str, &[&str])]) -> Self {
        let handles = pairs
            .iter()
            .map(|(id, hs)| {
                (
                    id.to_string(),
                    hs.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { handles }
    }
}

#[async_trait]
impl RecordResolver for MapResolver {
    async fn resolve(&self, identifier: &str) -> RemoteResult<Vec<ResolvedHandle>> {
        Ok(self
            .handles
            .get(identifier)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(ResolvedHandle)
            .collect())
    }
}

/// 记录全部插入请求的插入桩
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Mutex<Vec<AttachmentRequest>>,
}

#[async_trait]
impl AttachmentSink for RecordingSink {
    async fn insert(&self, request: &AttachmentRequest) -> RemoteResult<String> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(request.clone());
        Ok(format!("ecc{:03}", calls.len()))
    }
}

/// 在目录下生成 CSV 清单
pub fn write_manifest(dir: &Path, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("manifest.csv");
    let mut content = String::from("uniqueid,file\n");
    for (id, file) in rows {
        content.push_str(&format!("{},{}\n", id, file));
    }
    std::fs::write(&path, content).unwrap();
    path
}
