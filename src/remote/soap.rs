// ==========================================
// 批量附件上传工具 - SOAP 客户端
// ==========================================
// 职责: getKeys 记录查询 + ecc_queue insert 附件插入
// 协议: SOAP 1.1 over HTTP, basic auth
// ==========================================
// 说明: 两个调用的报文形状固定且扁平，请求用模板拼装、
//       响应按标签提取，不引入完整 SOAP 栈。
// ==========================================

use crate::config::AppConfig;
use crate::domain::ResolvedHandle;
use crate::remote::error::{RemoteError, RemoteResult};
use crate::remote::{AttachmentRequest, AttachmentSink, RecordResolver};
use async_trait::async_trait;
use tracing::debug;

/// XML 文本转义
fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// XML 文本反转义（仅处理五个预定义实体）
fn xml_unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// 从扁平响应文档中提取指定标签的文本
///
/// 服务端返回的文档结构固定且无属性标签，直接按
/// `<tag>` / `</tag>` 扫描即可。
fn extract_tag(xml: &str, tag: &str) -> Option<String> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = xml.find(&open)? + open.len();
    let end = start + xml[start..].find(&close)?;
    Some(xml_unescape(xml[start..end].trim()))
}

/// 包一层 SOAP 1.1 信封
fn soap_envelope(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <soapenv:Envelope xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soapenv:Body>{}</soapenv:Body>\
         </soapenv:Envelope>",
        body
    )
}

/// SOAP 客户端
///
/// 同时实现记录查询与附件插入两个端点。无超时覆写、无重试，
/// 失败直接以 RemoteError 返回给流水线。
pub struct SoapClient {
    http: reqwest::Client,
    lookup_url: String,
    insert_url: String,
    username: String,
    password: String,
    record_field: String,
}

impl SoapClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            lookup_url: config.lookup_endpoint(),
            insert_url: config.insert_endpoint(),
            username: config.username.clone(),
            password: config.password.clone(),
            record_field: config.record_field.clone(),
        }
    }

    /// getKeys 请求报文
    fn lookup_body(&self, identifier: &str) -> String {
        soap_envelope(&format!(
            "<getKeys><{field}>{value}</{field}></getKeys>",
            field = self.record_field,
            value = xml_escape(identifier),
        ))
    }

    /// insert 请求报文
    fn insert_body(request: &AttachmentRequest) -> String {
        soap_envelope(&format!(
            "<insert>\
             <agent>{}</agent>\
             <topic>{}</topic>\
             <name>{}</name>\
             <source>{}</source>\
             <payload>{}</payload>\
             </insert>",
            xml_escape(&request.agent),
            xml_escape(&request.topic),
            xml_escape(&request.name),
            xml_escape(&request.source),
            // base64 本身是 XML 安全的，转义为幂等操作
            xml_escape(&request.payload),
        ))
    }

    /// 发送一次 SOAP 调用并返回响应文本
    async fn call(&self, url: &str, body: String) -> RemoteResult<String> {
        let response = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", "")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// 解析 getKeys 响应为句柄列表
///
/// count > 1 时 sys_id 是逗号分隔串；count == 1 时为单值；
/// count == 0 时返回空列表（sys_id 可缺失）。
fn parse_lookup_response(xml: &str) -> RemoteResult<Vec<ResolvedHandle>> {
    let count_text =
        extract_tag(xml, "count").ok_or_else(|| RemoteError::MissingField("count".to_string()))?;
    let count: usize = count_text
        .parse()
        .map_err(|_| RemoteError::InvalidCount(count_text.clone()))?;

    if count == 0 {
        return Ok(Vec::new());
    }

    let sysid_text =
        extract_tag(xml, "sys_id").ok_or_else(|| RemoteError::MissingField("sys_id".to_string()))?;

    let handles: Vec<ResolvedHandle> = if count > 1 {
        sysid_text
            .splitn(count, ',')
            .map(|s| ResolvedHandle(s.trim().to_string()))
            .collect()
    } else {
        vec![ResolvedHandle(sysid_text)]
    };

    Ok(handles)
}

#[async_trait]
impl RecordResolver for SoapClient {
    async fn resolve(&self, identifier: &str) -> RemoteResult<Vec<ResolvedHandle>> {
        let body = self.lookup_body(identifier);
        debug!(identifier, url = %self.lookup_url, "发送记录查询");

        let xml = self.call(&self.lookup_url, body).await?;
        parse_lookup_response(&xml)
    }
}

#[async_trait]
impl AttachmentSink for SoapClient {
    async fn insert(&self, request: &AttachmentRequest) -> RemoteResult<String> {
        let body = Self::insert_body(request);
        debug!(source = %request.source, url = %self.insert_url, "发送附件插入");

        let xml = self.call(&self.insert_url, body).await?;
        extract_tag(&xml, "sys_id").ok_or_else(|| RemoteError::MissingField("sys_id".to_string()))
    }
}
