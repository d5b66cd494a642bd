//! Gemini calls against a local endpoint that accepts and never answers.

use std::net::{SocketAddr, TcpListener};
use std::time::{Duration, Instant};

use jiff::civil::date;
use physio_core::models::patient::{Patient, PatientStatus};
use physio_gateway::error::GatewayError;
use physio_gateway::gateway::AiGateway;
use physio_gateway::gemini::GeminiModel;
use physio_gateway::model::{GenerateRequest, GenerativeModel};

const CALL_TIMEOUT: Duration = Duration::from_millis(300);

/// Accept connections and hold them open without replying.
fn stalled_endpoint() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    addr
}

fn stalled_model() -> GeminiModel {
    GeminiModel::new("gemini-test", Some("test-key".to_string()))
        .with_base_url(format!("http://{}", stalled_endpoint()))
        .with_timeout(CALL_TIMEOUT)
}

fn patient() -> Patient {
    Patient {
        id: "p1".to_string(),
        name: "Ishaan".to_string(),
        age: 24,
        email: "ishaan@example.com".to_string(),
        physio_name: "Dr. Test".to_string(),
        injury: "Right Wrist Fracture".to_string(),
        injury_type: "wrist_post_cast".to_string(),
        start_date: date(2023, 11, 1),
        status: PatientStatus::OnTrack,
        prescribed_exercises: Vec::new(),
        logs: Vec::new(),
        benchmark_rom: vec![30, 40],
        weekly_reports: Vec::new(),
    }
}

#[tokio::test]
async fn stalled_call_fails_with_invocation_error() {
    let started = Instant::now();
    let err = stalled_model()
        .generate(&GenerateRequest::text("hi".to_string(), 0.0))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Invocation(_)), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[test]
fn runtime_shuts_down_promptly_after_stalled_call() {
    let started = Instant::now();
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let text = runtime.block_on(async {
        let gateway = AiGateway::new(stalled_model()).with_timeout(CALL_TIMEOUT);
        gateway.summarize_progress(&patient()).await
    });
    assert_eq!(text, "Error generating analysis.");

    // Dropping the runtime waits for the blocking HTTP thread.
    drop(runtime);
    assert!(
        started.elapsed() < Duration::from_secs(3),
        "shutdown took {:?}",
        started.elapsed()
    );
}
