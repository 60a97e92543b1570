use permit_engine::{CredentialStore, FeedClient, FeedError, FeedSettings, HttpFeedClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FixedCredentials(Option<&'static str>);

impl CredentialStore for FixedCredentials {
    fn credential(&self) -> Option<String> {
        self.0.map(ToOwned::to_owned)
    }
}

const KEY: &str = "testkey0123456789";

fn client_for(server: &MockServer) -> HttpFeedClient {
    let settings = FeedSettings {
        base_url: server.uri(),
        ..FeedSettings::default()
    };
    HttpFeedClient::new(settings, Box::new(FixedCredentials(Some(KEY))))
}

#[tokio::test]
async fn missing_credential_fails_without_a_request() {
    let client = HttpFeedClient::new(
        FeedSettings::default(),
        Box::new(FixedCredentials(None)),
    );

    let err = client.fetch(1, 100).await.unwrap_err();
    assert_eq!(err, FeedError::MissingCredential);
}

#[tokio::test]
async fn non_200_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}/I2500/json/1/100", KEY)))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(1, 100).await.unwrap_err();
    assert_eq!(
        err,
        FeedError::Transport {
            status: 404,
            body: "Not Found".to_string(),
        }
    );
}

#[tokio::test]
async fn feed_reported_failure_code_is_an_api_error() {
    let server = MockServer::start().await;
    let body = json!({
        "I2500": {
            "RESULT": { "CODE": "ERROR-300", "MSG": "필수 값이 누락되어 있습니다." }
        }
    });
    Mock::given(method("GET"))
        .and(path(format!("/{}/I2500/json/1/100", KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(1, 100).await.unwrap_err();
    assert_eq!(
        err,
        FeedError::Api {
            code: "ERROR-300".to_string(),
            message: "필수 값이 누락되어 있습니다.".to_string(),
        }
    );
}

#[tokio::test]
async fn missing_envelope_key_is_a_format_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}/I2500/json/1/100", KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(1, 100).await.unwrap_err();
    assert_eq!(
        err,
        FeedError::Format {
            key: "I2500".to_string(),
        }
    );
}

#[tokio::test]
async fn success_maps_rows_to_records() {
    let server = MockServer::start().await;
    let body = json!({
        "I2500": {
            "RESULT": { "CODE": "INFO-000", "MSG": "정상처리되었습니다." },
            "row": [
                {
                    "LCNS_NO": "20220012345",
                    "INDUTY_CD_NM": "일반음식점",
                    "BSSH_NM": "한강식당",
                    "PRSDNT_NM": "홍길동",
                    "TELNO": "02-1234-5678",
                    "PRMS_DT": "20220101",
                    "CHNG_DT": "20230301",
                    "ADDR": "서울 A로 1",
                    "SOME_UNUSED_FIELD": "dropped"
                },
                {
                    "BSSH_NM": "강변카페"
                }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path(format!("/{}/I2500/json/2/3", KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let records = client_for(&server).fetch(2, 3).await.expect("fetch ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].license_id, "20220012345");
    assert_eq!(records[0].category, "일반음식점");
    assert_eq!(records[0].business_name, "한강식당");
    assert_eq!(records[0].owner_name, "홍길동");
    assert_eq!(records[0].phone, "02-1234-5678");
    assert_eq!(records[0].permit_date, "20220101");
    assert_eq!(records[0].last_changed_date, "20230301");
    assert_eq!(records[0].address, "서울 A로 1");
    // Missing feed fields arrive as empty strings.
    assert_eq!(records[1].business_name, "강변카페");
    assert_eq!(records[1].license_id, "");
    assert_eq!(records[1].address, "");
}

#[tokio::test]
async fn page_without_rows_is_an_empty_success() {
    let server = MockServer::start().await;
    let body = json!({
        "I2500": {
            "RESULT": { "CODE": "INFO-000", "MSG": "정상처리되었습니다." }
        }
    });
    Mock::given(method("GET"))
        .and(path(format!("/{}/I2500/json/1/100", KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let records = client_for(&server).fetch(1, 100).await.expect("fetch ok");
    assert!(records.is_empty());
}
