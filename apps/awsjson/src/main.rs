//! awsjson - dry-run AWS JSON 1.1 requests.
//!
//! Marshals one Lambda or Lightsail operation from a JSON input document and
//! prints the request that would be sent. Nothing is sent: signing and
//! transport are out of scope.
//!
//! # Usage
//!
//! ```text
//! awsjson <lambda|lightsail> <Operation> [input.json]
//! echo '{"instanceName":"web-1"}' > in.json && awsjson lightsail GetInstance in.json
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | `us-east-1` | Region used to resolve the endpoint |
//! | `AWS_DEFAULT_REGION` | *(unset)* | Fallback for `AWS_REGION` |
//! | `AWS_ENDPOINT_URL` | *(unset)* | Endpoint override |
//! | `AWS_SDK_UA_APP_ID` | *(unset)* | Appended to the user agent |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use awsjson_core::{ClientConfig, ClientResult, ServiceMetadata};
use awsjson_http::JsonService;

const USAGE: &str = "usage: awsjson <lambda|lightsail> <Operation> [input.json]";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only the rendered request.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Services compiled into this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Service {
    #[cfg(feature = "lambda")]
    Lambda,
    #[cfg(feature = "lightsail")]
    Lightsail,
}

impl Service {
    fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            #[cfg(feature = "lambda")]
            "lambda" => Ok(Self::Lambda),
            #[cfg(feature = "lightsail")]
            "lightsail" => Ok(Self::Lightsail),
            _ => bail!("unsupported service: {name}\n{USAGE}"),
        }
    }

    fn metadata(self) -> ServiceMetadata {
        match self {
            #[cfg(feature = "lambda")]
            Self::Lambda => <awsjson_lambda_http::Lambda as JsonService>::METADATA,
            #[cfg(feature = "lightsail")]
            Self::Lightsail => <awsjson_lightsail_http::Lightsail as JsonService>::METADATA,
        }
    }

    fn marshall(self, operation: &str, input: &Value) -> ClientResult<http::Request<Bytes>> {
        match self {
            #[cfg(feature = "lambda")]
            Self::Lambda => awsjson_lambda_http::marshall_by_name(operation, Some(input)),
            #[cfg(feature = "lightsail")]
            Self::Lightsail => awsjson_lightsail_http::marshall_by_name(operation, Some(input)),
        }
    }
}

/// Parsed command line.
#[derive(Debug)]
struct Invocation {
    service: Service,
    operation: String,
    input: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    match args {
        [service, operation] => Ok(Invocation {
            service: Service::parse(service)?,
            operation: operation.clone(),
            input: None,
        }),
        [service, operation, input] => Ok(Invocation {
            service: Service::parse(service)?,
            operation: operation.clone(),
            input: Some(PathBuf::from(input)),
        }),
        _ => bail!(USAGE),
    }
}

async fn read_input(path: Option<&Path>) -> Result<Value> {
    let Some(path) = path else {
        return Ok(Value::Object(serde_json::Map::new()));
    };
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Render a request the way it would appear on the wire.
fn render(request: &http::Request<Bytes>, endpoint: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {endpoint}{} HTTP/1.1",
        request.method(),
        request.uri().path()
    );
    for (name, value) in request.headers() {
        let _ = writeln!(out, "{name}: {}", String::from_utf8_lossy(value.as_bytes()));
    }
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(request.body()));
    out
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env();
    init_tracing(&config.log_level)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args)?;
    let input = read_input(invocation.input.as_deref()).await?;

    let metadata = invocation.service.metadata();
    let request = invocation
        .service
        .marshall(&invocation.operation, &input)
        .with_context(|| format!("failed to marshal {}", invocation.operation))?;
    let endpoint = config.resolve_endpoint(&metadata);

    info!(
        service = metadata.service_name,
        operation = %invocation.operation,
        endpoint = %endpoint,
        "dry run, request not sent"
    );
    println!("{}", render(&request, &endpoint));

    Ok(())
}
