use crate::harness::config::test_config;
use crate::harness::init_test_tracing;
use cacheprobe_core::synth::ImageSpec;
use cacheprobe_core::server::{build_dispatcher, build_pingora_server};
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::thread;
use std::time::{Duration, Instant};

/// Canvas used unless a test asks for something else.
pub const TEST_SPEC: ImageSpec = ImageSpec {
    width: 320,
    height: 240,
};

/// Handle to a running cache test server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a server with the default test canvas.
    pub fn start() -> Self {
        Self::start_with(TEST_SPEC)
    }

    /// Start a server on a free port. Each server has its own request counter,
    /// so tests can run in parallel and still assert exact counts.
    pub fn start_with(spec: ImageSpec) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing();

        let listen_port = free_port();
        let cfg = test_config(listen_port, spec);
        cfg.validate().expect("invalid test config");

        let dispatcher = build_dispatcher(&cfg);
        let server = build_pingora_server(&cfg, dispatcher).expect("failed to build server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build client");

        Self { base_url, client }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.client.head(format!("{}{}", self.base_url, path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}{}", self.base_url, path))
    }

    /// `totalRequests` as reported by `/status`.
    pub fn total_requests(&self) -> u64 {
        let body: serde_json::Value = self
            .get("/status")
            .send()
            .expect("status request failed")
            .json()
            .expect("status body is not json");

        body["totalRequests"]
            .as_u64()
            .expect("totalRequests missing")
    }
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(5);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

/// Allocate a free port on localhost to avoid collisions between parallel tests.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
