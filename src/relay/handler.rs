use lambda_http::http::Method;
use lambda_http::{Body, Error, Request, Response};
use tracing::{error, info_span, warn, Instrument};

use crate::app::App;
use crate::commands::{handle_available_to_help, parse_slash_command};
use crate::error::RelayError;
use crate::events::handle_event_payload;
use crate::types::CommandResponse;

pub async fn function_handler(app: &App, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().clone();
    let path = event.uri().path().trim_end_matches('/').to_string();
    let span = info_span!("request", %method, path = %path);

    async move {
        match (&method, path.as_str()) {
            (&Method::GET, "/info") => text_response(200, describe_request(&event)),
            (&Method::POST, "/slack/events") => {
                let result = handle_event_payload(app, event.body()).await;
                respond(result, |text| text_response(200, text))
            }
            (&Method::POST, "/slack/commands/availableToHelp") => {
                let result = handle_command(app, event.body()).await;
                respond(result, |response| {
                    Ok(Response::builder()
                        .status(200)
                        .header("Content-Type", "application/json")
                        .body(Body::from(serde_json::to_string(&response)?))?)
                })
            }
            (_, "/info" | "/slack/events" | "/slack/commands/availableToHelp") => {
                text_response(405, "Method Not Allowed".to_string())
            }
            _ => text_response(404, "Not Found".to_string()),
        }
    }
    .instrument(span)
    .await
}

async fn handle_command(app: &App, body: &[u8]) -> Result<CommandResponse, RelayError> {
    let body =
        std::str::from_utf8(body).map_err(|e| RelayError::MalformedPayload(e.to_string()))?;
    let command = parse_slash_command(body)?;
    handle_available_to_help(app, &command).await
}

fn respond<T>(
    result: Result<T, RelayError>,
    on_success: impl FnOnce(T) -> Result<Response<Body>, Error>,
) -> Result<Response<Body>, Error> {
    match result {
        Ok(value) => on_success(value),
        Err(err @ RelayError::Upstream(_)) => {
            error!("Slack call failed: {}", err);
            text_response(err.status_code(), err.to_string())
        }
        Err(err) => {
            warn!("Rejecting request: {}", err);
            text_response(err.status_code(), err.to_string())
        }
    }
}

fn text_response(status: u16, text: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Body::from(text))?)
}

/// Plain-text dump of the request line, headers and body size.
pub fn describe_request(event: &Request) -> String {
    let mut lines = vec![format!(
        "{} {} {:?}",
        event.method(),
        event.uri(),
        event.version()
    )];
    lines.extend(event.headers().iter().map(|(name, value)| {
        format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
    }));
    lines.push(format!("body: {} bytes", event.body().len()));
    lines.join("\n")
}
