// ==========================================
// SOAP 客户端集成测试
// ==========================================
// 测试目标: getKeys / insert 的报文与应答处理
// 工具: wiremock 模拟远程实例
// ==========================================

mod test_helpers;

use base64::{engine::general_purpose::STANDARD, Engine};
use bulk_attach::remote::{AttachmentRequest, AttachmentSink, RecordResolver, RemoteError};
use bulk_attach::{logging, SoapClient};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 指向 mock 实例的配置
fn mock_config(server: &MockServer) -> bulk_attach::AppConfig {
    let dir = std::env::temp_dir();
    let mut config = test_helpers::test_config(&dir, &dir.join("in.csv"), &dir.join("out.csv"), false);
    config.instance_url = server.uri();
    config
}

/// basic auth 期望值（attachment_user:attachment_password）
fn expected_auth() -> String {
    format!(
        "Basic {}",
        STANDARD.encode("attachment_user:attachment_password")
    )
}

#[tokio::test]
async fn test_resolve_single_handle() {
    logging::init_test();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ast_contract.do"))
        .and(header("authorization", expected_auth().as_str()))
        .and(body_string_contains("<u_uniqueid>REC123</u_uniqueid>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<getKeysResponse><sys_id>abc123</sys_id><count>1</count></getKeysResponse>",
        ))
        .mount(&server)
        .await;

    let client = SoapClient::new(&mock_config(&server));
    let handles = client.resolve("REC123").await.unwrap();

    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].as_str(), "abc123");
}

#[tokio::test]
async fn test_resolve_multiple_handles_in_return_order() {
    logging::init_test();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ast_contract.do"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<getKeysResponse><sys_id>h1,h2,h3</sys_id><count>3</count></getKeysResponse>",
        ))
        .mount(&server)
        .await;

    let client = SoapClient::new(&mock_config(&server));
    let handles = client.resolve("REC999").await.unwrap();

    let ids: Vec<&str> = handles.iter().map(|h| h.as_str()).collect();
    assert_eq!(ids, vec!["h1", "h2", "h3"]);
}

#[tokio::test]
async fn test_resolve_zero_count_empty() {
    logging::init_test();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ast_contract.do"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<getKeysResponse><count>0</count></getKeysResponse>"),
        )
        .mount(&server)
        .await;

    let client = SoapClient::new(&mock_config(&server));
    let handles = client.resolve("NOPE").await.unwrap();
    assert!(handles.is_empty());
}

#[tokio::test]
async fn test_resolve_http_error_status() {
    logging::init_test();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ast_contract.do"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = SoapClient::new(&mock_config(&server));
    let result = client.resolve("REC123").await;
    assert!(matches!(result, Err(RemoteError::HttpStatus(401))));
}

#[tokio::test]
async fn test_insert_returns_remote_id() {
    logging::init_test();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ecc_queue.do"))
        .and(header("authorization", expected_auth().as_str()))
        .and(body_string_contains("<agent>AttachmentCreator</agent>"))
        .and(body_string_contains("<source>ast_contract:abc123</source>"))
        .and(body_string_contains("<payload>aGVsbG8=</payload>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<insertResponse><sys_id>ecc_42</sys_id></insertResponse>",
        ))
        .mount(&server)
        .await;

    let client = SoapClient::new(&mock_config(&server));
    let request = AttachmentRequest::attachment_creator(
        "invoice.pdf",
        "ast_contract",
        "abc123",
        STANDARD.encode("hello"),
    );
    let remote_id = client.insert(&request).await.unwrap();
    assert_eq!(remote_id, "ecc_42");
}

#[tokio::test]
async fn test_insert_missing_sysid_in_response() {
    logging::init_test();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ecc_queue.do"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<insertResponse/>"))
        .mount(&server)
        .await;

    let client = SoapClient::new(&mock_config(&server));
    let request = AttachmentRequest::attachment_creator("a.txt", "ast_contract", "h1", "eA==".to_string());
    let result = client.insert(&request).await;
    assert!(matches!(result, Err(RemoteError::MissingField(ref f)) if f == "sys_id"));
}
