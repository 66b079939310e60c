use gousdbrl::core::RateError;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const RATE_PATH: &str = "/gb/currency-converter/usd-to-brl-rate";

    pub fn rate_page(rate: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
            <html><body>
              <h3><span dir="ltr">1.00 USD = <span class="text-success">{rate}</span> BRL</span></h3>
            </body></html>"#
        )
    }

    pub async fn create_mock_server(status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(RATE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

struct Env {
    data_dir: TempDir,
    config_path: PathBuf,
}

impl Env {
    fn new(server_uri: &str) -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = data_dir.path().join("config.yaml");
        let config_content = format!(
            r#"
            source:
              url: '{}{}'
              timeout_secs: 5
            data_dir: '{}'
        "#,
            server_uri,
            test_utils::RATE_PATH,
            data_dir.path().display()
        );
        fs::write(&config_path, config_content).expect("Failed to write config file");

        Self {
            data_dir,
            config_path,
        }
    }

    fn state_path(&self) -> PathBuf {
        self.data_dir.path().join("data.json")
    }

    fn write_state(&self, content: &str) {
        fs::write(self.state_path(), content).expect("Failed to write state file");
    }

    async fn run(&self) -> anyhow::Result<()> {
        gousdbrl::run_command(
            gousdbrl::AppCommand::Check,
            Some(self.config_path.to_str().unwrap()),
        )
        .await
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("Failed to read state file"))
        .expect("State file is not JSON")
}

#[test_log::test(tokio::test)]
async fn test_first_run_persists_rate() {
    let mock_server = test_utils::create_mock_server(200, &test_utils::rate_page("5.00")).await;
    let env = Env::new(&mock_server.uri());

    let result = env.run().await;
    assert!(result.is_ok(), "Check failed with: {:?}", result.err());

    let state = read_json(&env.state_path());
    info!(?state, "Persisted state");
    assert_eq!(state["config"]["value"], json!(5.0));
}

#[test_log::test(tokio::test)]
async fn test_lower_rate_overwrites_state() {
    let mock_server = test_utils::create_mock_server(200, &test_utils::rate_page("5.20")).await;
    let env = Env::new(&mock_server.uri());
    env.write_state(r#"{"config":{"value":5.50},"owner":"scheduler"}"#);

    let result = env.run().await;
    assert!(result.is_ok(), "Check failed with: {:?}", result.err());

    let state = read_json(&env.state_path());
    assert_eq!(state["config"]["value"], json!(5.2));
    assert_eq!(state["owner"], json!("scheduler"));
}

#[test_log::test(tokio::test)]
async fn test_same_rate_keeps_value() {
    let mock_server = test_utils::create_mock_server(200, &test_utils::rate_page("5.20")).await;
    let env = Env::new(&mock_server.uri());
    env.write_state(r#"{"config":{"value":5.20}}"#);

    let result = env.run().await;
    assert!(result.is_ok(), "Check failed with: {:?}", result.err());

    assert_eq!(read_json(&env.state_path())["config"]["value"], json!(5.2));
}

#[test_log::test(tokio::test)]
async fn test_server_error_leaves_state_untouched() {
    let mock_server = test_utils::create_mock_server(500, "Internal Server Error").await;
    let env = Env::new(&mock_server.uri());
    let original = r#"{"config":{"value":5.50}}"#;
    env.write_state(original);

    let err = env.run().await.expect_err("Check should fail on HTTP 500");

    assert!(matches!(
        err.downcast_ref::<RateError>(),
        Some(RateError::FetchFailed(_))
    ));
    assert!(format!("{err:#}").contains("unexpected status code: 500"));
    assert_eq!(fs::read_to_string(env.state_path()).unwrap(), original);
}

#[test_log::test(tokio::test)]
async fn test_missing_element_leaves_state_untouched() {
    let mock_server =
        test_utils::create_mock_server(200, "<html><body><h1>Sorry</h1></body></html>").await;
    let env = Env::new(&mock_server.uri());

    let err = env.run().await.expect_err("Check should fail without the rate element");

    assert!(matches!(
        err.downcast_ref::<RateError>(),
        Some(RateError::ValueNotFound)
    ));
    assert!(!env.state_path().exists());
}

#[test_log::test(tokio::test)]
async fn test_corrupt_state_is_fatal() {
    let mock_server = test_utils::create_mock_server(200, &test_utils::rate_page("5.00")).await;
    let env = Env::new(&mock_server.uri());
    env.write_state(r#"{"settings":{}}"#);

    let err = env.run().await.expect_err("Check should fail on corrupt state");

    assert!(matches!(
        err.downcast_ref::<RateError>(),
        Some(RateError::CorruptState(_))
    ));
    assert_eq!(
        fs::read_to_string(env.state_path()).unwrap(),
        r#"{"settings":{}}"#
    );
}

#[test_log::test(tokio::test)]
async fn test_last_reads_previous_run() {
    let mock_server = test_utils::create_mock_server(200, &test_utils::rate_page("5.31")).await;
    let env = Env::new(&mock_server.uri());
    env.run().await.expect("Check failed");

    let result = gousdbrl::run_command(
        gousdbrl::AppCommand::Last,
        Some(env.config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Last failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");

    let result = gousdbrl::run_command(
        gousdbrl::AppCommand::Check,
        Some(missing.to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}
