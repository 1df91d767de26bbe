//! Test doubles for the generation pipeline.
//!
//! - `MockProxy`: a loopback HTTP server that answers every POST with a canned
//!   status and body, recording the JSON bodies it receives. `start_silent`
//!   accepts and never replies, for timeout tests.
//! - `ScriptedGenerator`: an `EmojiGenerator` that sleeps, tracks concurrency
//!   and records call order.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::{
    error::FailureKind,
    generation::traits::EmojiGenerator,
    models::{CallerIdentity, GenerationRequest, GenerationResult},
};

// ============================================================================
// Mock proxy
// ============================================================================

pub struct MockProxy {
    port: u16,
    received: Arc<Mutex<Vec<Value>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockProxy {
    pub async fn start(status: u16, body: Value) -> Self {
        Self::start_raw(status, &body.to_string()).await
    }

    pub async fn start_raw(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let received = Arc::new(Mutex::new(Vec::new()));
        let body = body.to_string();

        let sink = received.clone();
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let sink = sink.clone();
                let body = body.clone();
                tokio::spawn(async move {
                    let _ = serve_one(stream, status, &body, sink).await;
                });
            }
        });

        Self {
            port,
            received,
            handle,
        }
    }

    /// Accepts connections but never answers; holds them open until dropped.
    pub async fn start_silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        Self {
            port,
            received: Arc::new(Mutex::new(Vec::new())),
            handle,
        }
    }

    /// An endpoint on a port nothing listens on.
    pub async fn closed_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}/api/generate", port)
    }

    pub fn endpoint(&self) -> String {
        format!("http://127.0.0.1:{}/api/generate", self.port)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl Drop for MockProxy {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_one(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    sink: Arc<Mutex<Vec<Value>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    if let Ok(json) = serde_json::from_slice::<Value>(&buf[header_end..]) {
        sink.lock().unwrap().push(json);
    }

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

// ============================================================================
// Scripted generator
// ============================================================================

pub struct ScriptedGenerator {
    delay: Duration,
    descending_delays: bool,
    fail_on: Option<String>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    events: Mutex<Vec<String>>,
    callers: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            descending_delays: false,
            fail_on: None,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            events: Mutex::new(Vec::new()),
            callers: Mutex::new(Vec::new()),
        }
    }

    /// Prompts named `prompt-N` sleep `delay * (10 - N)`.
    pub fn with_descending_delays(mut self) -> Self {
        self.descending_delays = true;
        self
    }

    pub fn failing_on(mut self, prompt: &str) -> Self {
        self.fail_on = Some(prompt.to_string());
        self
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn callers(&self) -> Vec<String> {
        self.callers.lock().unwrap().clone()
    }

    fn delay_for(&self, prompt: &str) -> Duration {
        if !self.descending_delays {
            return self.delay;
        }
        let index = prompt
            .rsplit('-')
            .next()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(0);
        self.delay * 10u32.saturating_sub(index).max(1)
    }
}

#[async_trait]
impl EmojiGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
        caller: &CallerIdentity,
    ) -> GenerationResult {
        let prompt = request.prompt().to_string();
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.callers.lock().unwrap().push(caller.to_string());
        self.events.lock().unwrap().push(format!("start {}", prompt));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay_for(&prompt)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(format!("end {}", prompt));

        if self.fail_on.as_deref() == Some(prompt.as_str()) {
            GenerationResult::failed(FailureKind::RemoteService, "scripted failure")
        } else {
            GenerationResult::succeeded(format!("https://emoji.test/{}.png", prompt), Some(1))
        }
    }
}
