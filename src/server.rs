use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, u16::MAX as u64);
const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn from_name(value: &str, default: LogLevel) -> LogLevel {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            _ => default,
        }
    }
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    static_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        let port = parse_env_u64_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_max_age_seconds = parse_env_u64_with_bounds(
            "STATIC_MAX_AGE_SECONDS",
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT as u16),
            dist_dir,
            static_max_age_seconds,
            log_level,
        }
    }
}

/// Serves the built site with single-page fallback to `index.html`.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
            "static_max_age_seconds": config.static_max_age_seconds,
        }),
    );

    axum::serve(listener, site_router(config.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event(&config, LogLevel::Info, "server_stopped", serde_json::json!({}));
    Ok(())
}

fn site_router(config: HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(
            Arc::new(config),
            observe_request,
        ))
}

async fn observe_request(
    State(config): State<Arc<HostConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    log_event(
        &config,
        LogLevel::Debug,
        "static_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;
    let status = response.status();

    if status.is_success() || status == StatusCode::NOT_MODIFIED {
        let is_html = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("text/html"));
        let policy = cache_policy(&path, is_html, config.static_max_age_seconds);
        response.headers_mut().insert(header::CACHE_CONTROL, policy);
    }
    attach_request_id(response.headers_mut(), &request_id);

    log_event(
        &config,
        LogLevel::Info,
        "static_request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis() as u64,
        }),
    );

    response
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// HTML documents and extensionless routes are revalidated on every load;
/// hashed build assets may be cached.
fn cache_policy(path: &str, is_html: bool, max_age_seconds: u64) -> HeaderValue {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let has_asset_extension = file_name
        .rsplit_once('.')
        .is_some_and(|(stem, extension)| {
            !stem.is_empty() && !extension.is_empty() && !extension.eq_ignore_ascii_case("html")
        });

    if is_html || !has_asset_extension {
        return HeaderValue::from_static("no-cache");
    }
    cache_control(&format!("public, max-age={max_age_seconds}"))
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    parse_env_non_empty_string(name)
        .map(|value| LogLevel::from_name(&value, default))
        .unwrap_or(default)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn attach_request_id(headers: &mut HeaderMap, request_id: &str) {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_host_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            port: 0,
            dist_dir,
            static_max_age_seconds: 60,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    async fn fetch(address: std::net::SocketAddr, path: &str, extra_headers: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(address)
            .await
            .expect("test server accepts connections");
        let request = format!(
            "GET {path} HTTP/1.1\r\nHost: localhost\r\n{extra_headers}Connection: close\r\n\r\n"
        );
        stream
            .write_all(request.as_bytes())
            .await
            .expect("request is written");

        let mut raw = Vec::new();
        stream
            .read_to_end(&mut raw)
            .await
            .expect("response is read");
        String::from_utf8_lossy(&raw).to_ascii_lowercase()
    }

    #[test]
    fn debug_sorts_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::from_name(" DEBUG ", LogLevel::Info), LogLevel::Debug);
        assert_eq!(LogLevel::from_name("trace", LogLevel::Info), LogLevel::Info);
    }

    #[test]
    fn html_and_routes_are_revalidated() {
        assert_eq!(cache_policy("/", false, 60), "no-cache");
        assert_eq!(cache_policy("/index.html", false, 60), "no-cache");
        assert_eq!(cache_policy("/projects", false, 60), "no-cache");
        assert_eq!(cache_policy("/.well-known", false, 60), "no-cache");
        assert_eq!(cache_policy("/missing.js", true, 60), "no-cache");
    }

    #[test]
    fn assets_get_the_configured_max_age() {
        assert_eq!(
            cache_policy("/motion-portfolio-3f2a_bg.wasm", false, 3_600),
            "public, max-age=3600"
        );
        assert_eq!(cache_policy("/project_wheat.jpg", false, 0), "public, max-age=0");
    }

    #[test]
    fn request_id_is_propagated_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  upstream-7 "));
        assert_eq!(resolve_request_id(&headers), "upstream-7");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        let generated = resolve_request_id(&headers);
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));
    }

    #[test]
    fn out_of_range_values_fall_back_to_the_default() {
        std::env::set_var("MOTION_PORTFOLIO_TEST_MAX_AGE", "99999999999");
        assert_eq!(
            parse_env_u64_with_bounds(
                "MOTION_PORTFOLIO_TEST_MAX_AGE",
                DEFAULT_STATIC_MAX_AGE_SECONDS,
                STATIC_MAX_AGE_SECONDS_BOUNDS,
            ),
            DEFAULT_STATIC_MAX_AGE_SECONDS
        );

        std::env::set_var("MOTION_PORTFOLIO_TEST_MAX_AGE", " 120 ");
        assert_eq!(
            parse_env_u64_with_bounds(
                "MOTION_PORTFOLIO_TEST_MAX_AGE",
                DEFAULT_STATIC_MAX_AGE_SECONDS,
                STATIC_MAX_AGE_SECONDS_BOUNDS,
            ),
            120
        );
        std::env::remove_var("MOTION_PORTFOLIO_TEST_MAX_AGE");
    }

    #[tokio::test]
    async fn unknown_routes_fall_back_to_the_index() {
        let dist_dir = std::env::temp_dir().join(format!(
            "motion-portfolio-host-{}-{}",
            std::process::id(),
            now_unix_millis()
        ));
        std::fs::create_dir_all(&dist_dir).expect("temp dist dir is created");
        std::fs::write(dist_dir.join("index.html"), "<div id=\"app\"></div>")
            .expect("index is written");
        std::fs::write(dist_dir.join("app.js"), "console.log(1);").expect("asset is written");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port is free");
        let address = listener.local_addr().expect("listener has an address");
        let app = site_router(test_host_config(dist_dir.clone()));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let route = fetch(address, "/projects", "x-request-id: trace-1\r\n").await;
        assert!(route.starts_with("http/1.1 200"));
        assert!(route.contains("cache-control: no-cache"));
        assert!(route.contains("x-request-id: trace-1"));
        assert!(route.contains("<div id=\"app\"></div>"));

        let asset = fetch(address, "/app.js", "").await;
        assert!(asset.contains("cache-control: public, max-age=60"));
        assert!(asset.contains("x-request-id: req-"));

        let _ = std::fs::remove_dir_all(dist_dir);
    }
}
