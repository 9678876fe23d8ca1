// ==========================================
// 批量附件上传工具 - 主入口
// ==========================================
// 用法: bulk-attach [config.json]
// 退出码: 启动失败（配置/清单/输出）非零；
//         条目级失败只记录，不影响退出码
// ==========================================

use anyhow::Context;
use bulk_attach::engine::{Orchestrator, UploadPipeline};
use bulk_attach::remote::{AttachmentSink, RecordResolver, SoapClient};
use bulk_attach::report::ResultWriter;
use bulk_attach::{logging, AppConfig, UniversalManifestParser};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("批量附件上传工具");
    tracing::info!("版本: {}", bulk_attach::VERSION);
    tracing::info!("==================================================");

    // 配置文件路径取第一个参数，缺省 config.json
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("加载配置失败: {}", config_path))?;

    tracing::info!("目标表单: {}", config.table);
    tracing::info!("附件目录: {}", config.storage_dir.display());
    tracing::info!("dry-run: {}", config.dry_run);

    // 读取输入清单（全有或全无）
    let entries = UniversalManifestParser
        .parse(&config.input_file, &config.id_column, &config.file_column)
        .with_context(|| format!("读取清单失败: {}", config.input_file.display()))?;
    tracing::info!("清单条目数: {}", entries.len());

    // 输出清单与远程客户端
    let writer = Arc::new(
        ResultWriter::create(&config.output_file)
            .with_context(|| format!("创建输出清单失败: {}", config.output_file.display()))?,
    );
    let client = Arc::new(SoapClient::new(&config));
    let resolver: Arc<dyn RecordResolver> = client.clone();
    let sink: Arc<dyn AttachmentSink> = client;

    let pipeline = Arc::new(UploadPipeline::new(Arc::new(config), resolver, sink, writer));
    let summary = Orchestrator::new(pipeline).run(entries).await?;

    tracing::info!("==================================================");
    tracing::info!(
        "运行结束: 共 {} 条，完成 {}，文件缺失 {}，非文件 {}，无匹配 {}，传输失败 {}",
        summary.total_entries,
        summary.done,
        summary.files_missing,
        summary.not_a_file,
        summary.identifier_missing,
        summary.transport_errors,
    );
    tracing::info!("==================================================");

    Ok(())
}
