// ==========================================
// 批量附件上传工具 - 运行配置
// ==========================================
// 职责: 配置加载与校验
// 存储: JSON 配置文件（默认 config.json）
// ==========================================
// 说明: 目录、凭据、开关全部走显式结构体传递，
//       不使用全局可变状态。
// ==========================================

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败: {0}")]
    ReadError(String),

    #[error("配置文件解析失败: {0}")]
    ParseError(String),

    #[error("配置值非法 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

fn default_chunks() -> usize {
    20
}

fn default_id_column() -> String {
    "uniqueid".to_string()
}

fn default_file_column() -> String {
    "file".to_string()
}

/// 运行配置
///
/// 对应原始部署的静态常量全集：附件目录、远程实例与凭据、
/// 目标表单、标识字段、输入/输出清单、dry-run 开关与分块数。
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 附件文件所在目录
    pub storage_dir: PathBuf,
    /// 远程实例基地址，如 https://instance.example.com
    pub instance_url: String,
    /// 远程凭据（basic auth）
    pub username: String,
    pub password: String,
    /// 附件挂载的目标表单
    pub table: String,
    /// 目标表单上的业务标识字段名
    pub record_field: String,
    /// 输入清单路径（.csv / .xlsx / .xls）
    pub input_file: PathBuf,
    /// 输出清单路径（CSV）
    pub output_file: PathBuf,
    /// dry-run: 只校验与解析，不调用插入端点
    #[serde(default)]
    pub dry_run: bool,
    /// 分块数上限（≥1），即并发工作任务数上限
    #[serde(default = "default_chunks")]
    pub chunks: usize,
    /// 输入清单中标识列的表头名
    #[serde(default = "default_id_column")]
    pub id_column: String,
    /// 输入清单中文件名列的表头名
    #[serde(default = "default_file_column")]
    pub file_column: String,
}

impl AppConfig {
    /// 从 JSON 文件加载配置并校验
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;
        let config: AppConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunks < 1 {
            return Err(ConfigError::InvalidValue {
                key: "chunks".to_string(),
                message: "分块数必须 ≥ 1".to_string(),
            });
        }
        if self.instance_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "instance_url".to_string(),
                message: "实例地址不能为空".to_string(),
            });
        }
        if self.table.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "table".to_string(),
                message: "目标表单不能为空".to_string(),
            });
        }
        if self.record_field.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "record_field".to_string(),
                message: "标识字段不能为空".to_string(),
            });
        }
        Ok(())
    }

    /// 记录查询端点（目标表单的 SOAP 入口）
    pub fn lookup_endpoint(&self) -> String {
        format!("{}/{}.do?SOAP", self.instance_url.trim_end_matches('/'), self.table)
    }

    /// 附件插入端点（ecc_queue 的 SOAP 入口）
    pub fn insert_endpoint(&self) -> String {
        format!("{}/ecc_queue.do?SOAP", self.instance_url.trim_end_matches('/'))
    }
}
