use async_trait::async_trait;
use bmi_model::advice::{AdviceRequest, HealthAdvice};
use log::{debug, info};

use crate::{
    config::GeminiConfig,
    gemini::{self, GenerateContentResponse},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("advice service unreachable")]
    CommunicationError,
    #[error("advice service internal error")]
    InternalServerError,
    #[error("invalid advice request")]
    RequestError,
    #[error("incorrect advice response")]
    ResponseError,
    #[error("advice service API key not configured")]
    MissingApiKey,
}

type Result<T> = std::result::Result<T, Error>;

/// Source of health advice for a computed BMI.
///
/// Callers treat every `Err` as "advice unavailable".
#[mockall::automock]
#[async_trait]
pub trait AdviceGateway: Send + Sync {
    async fn fetch_advice(&self, request: &AdviceRequest) -> Result<HealthAdvice>;
}

pub struct GeminiGateway {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiGateway {
    fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(config: GeminiConfig) -> impl AdviceGateway {
    GeminiGateway::new(config)
}

#[async_trait]
impl AdviceGateway for GeminiGateway {
    async fn fetch_advice(&self, request: &AdviceRequest) -> Result<HealthAdvice> {
        let api_key = self.config.api_key.as_ref().ok_or(Error::MissingApiKey)?;

        info!(
            "Requesting advice for BMI {:.1} ({}) from {}",
            request.bmi, request.category, self.config.model
        );
        let response: GenerateContentResponse = self
            .client
            .post(self.config.generate_content_url())
            .header("x-goog-api-key", api_key)
            .json(&gemini::build_request(request))
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .json()
            .await
            .map_err(|_| Error::ResponseError)?;

        let advice = gemini::parse_response(response)?;
        debug!("Received summary and {} tips", advice.tips.len());
        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use bmi_model::result::BmiCategory;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    use super::*;

    fn request() -> AdviceRequest {
        AdviceRequest {
            bmi: 22.9,
            category: BmiCategory::Normal,
        }
    }

    fn gateway(base_url: String) -> impl AdviceGateway {
        create(GeminiConfig {
            base_url,
            api_key: Some("key".to_owned()),
            ..Default::default()
        })
    }

    async fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// Answers a single HTTP request with the given status and body.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
        });
        format!("http://{}", address)
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let gateway = create(GeminiConfig::default());
        assert!(matches!(
            gateway.fetch_advice(&request()).await,
            Err(Error::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn closed_port_is_a_communication_error() {
        let gateway = gateway("http://127.0.0.1:1".to_owned());
        assert!(matches!(
            gateway.fetch_advice(&request()).await,
            Err(Error::CommunicationError)
        ));
    }

    #[tokio::test]
    async fn client_error_status_is_a_request_error() {
        let gateway = gateway(serve_once("400 Bad Request", "{}").await);
        assert!(matches!(
            gateway.fetch_advice(&request()).await,
            Err(Error::RequestError)
        ));
    }

    #[tokio::test]
    async fn server_error_status_is_an_internal_server_error() {
        let gateway = gateway(serve_once("503 Service Unavailable", "{}").await);
        assert!(matches!(
            gateway.fetch_advice(&request()).await,
            Err(Error::InternalServerError)
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_a_response_error() {
        let gateway = gateway(serve_once("200 OK", "<html>oops</html>").await);
        assert!(matches!(
            gateway.fetch_advice(&request()).await,
            Err(Error::ResponseError)
        ));
    }

    #[tokio::test]
    async fn parses_successful_response() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"summary\":\"On track\",\"tips\":[\"Walk daily\"]}"}]}}]}"#;
        let gateway = gateway(serve_once("200 OK", body).await);

        let advice = gateway.fetch_advice(&request()).await.unwrap();

        assert_eq!(
            advice,
            HealthAdvice::new("On track", vec!["Walk daily".to_owned()])
        );
    }
}
