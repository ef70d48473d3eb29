use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use bmi_tracker_client::{ClientConfig, HttpBmiApi};
use bmi_tracker_domain::entities::FormSubmission;
use bmi_tracker_domain::services::controller::{GENERIC_FAILURE_MESSAGE, VALIDATION_MESSAGE};
use bmi_tracker_domain::services::{ApiError, FormController, Outcome, PageEvent};
use bmi_tracker_domain::testing::{RecordingChartBackend, RecordingView};
use bmi_tracker_domain::view::HistoryListing;

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().init();
    });
}

/// In-memory stand-in for the BMI server
#[derive(Default)]
struct StubServer {
    history: Mutex<Vec<Value>>,
    requests: Mutex<Vec<Value>>,
    calculate_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

fn categorize(bmi: f64) -> (&'static str, &'static str) {
    if bmi < 18.5 {
        ("Underweight", "#f0ad4e")
    } else if bmi < 24.9 {
        ("Normal weight", "#5cb85c")
    } else if bmi < 29.9 {
        ("Overweight", "#f0ad4e")
    } else {
        ("Obesity", "#d9534f")
    }
}

async fn calculate(
    State(stub): State<Arc<StubServer>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let call = stub.calculate_calls.fetch_add(1, Ordering::SeqCst) + 1;
    assert_eq!(
        headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    stub.requests.lock().unwrap().push(body.clone());

    let weight = body["weight"].as_f64().unwrap_or(0.0);
    let height = body["height"].as_f64().unwrap_or(0.0) / 100.0;
    if weight <= 0.0 || height <= 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Height and weight must be positive numbers." })),
        );
    }

    let bmi = (weight / (height * height) * 100.0).round() / 100.0;
    let (category, color) = categorize(bmi);

    stub.history.lock().unwrap().insert(
        0,
        json!({
            "id": call,
            "weight": weight,
            "height": height,
            "bmi": bmi,
            "category": category,
            "color": color,
            "timestamp": format!("2024-03-01 12:00:{:02}", call),
        }),
    );

    (
        StatusCode::OK,
        Json(json!({ "bmi": bmi, "category": category, "color": color })),
    )
}

async fn history(State(stub): State<Arc<StubServer>>) -> Json<Value> {
    stub.history_calls.fetch_add(1, Ordering::SeqCst);
    Json(Value::Array(stub.history.lock().unwrap().clone()))
}

fn stub_router(stub: Arc<StubServer>) -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/history", get(history))
        .with_state(stub)
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

type TestController = FormController<HttpBmiApi, RecordingView, RecordingChartBackend>;

fn controller_for(addr: SocketAddr) -> TestController {
    let config = ClientConfig::new(&format!("http://{}", addr)).unwrap();
    FormController::new(
        HttpBmiApi::new(config),
        RecordingView::new(),
        RecordingChartBackend::new(),
    )
}

#[tokio::test]
async fn test_page_load_with_empty_history() {
    initialize();

    let stub = Arc::new(StubServer::default());
    let addr = serve(stub_router(stub.clone())).await;
    let mut controller = controller_for(addr);

    let outcome = controller.dispatch(PageEvent::Ready).await;

    assert_eq!(outcome, Outcome::HistoryLoaded { entries: 0 });
    assert_eq!(controller.view().history, Some(HistoryListing::Placeholder));
    let chart = controller.chart().backend().last_chart().unwrap();
    assert!(chart.labels.is_empty());
    assert!(chart.values().is_empty());
    assert_eq!(stub.history_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_submit_displays_result_and_refreshes_history() {
    initialize();

    let stub = Arc::new(StubServer::default());
    let addr = serve(stub_router(stub.clone())).await;
    let mut controller = controller_for(addr);

    controller.dispatch(PageEvent::Ready).await;
    let outcome = controller
        .dispatch(PageEvent::Submit(FormSubmission::new("70", "175")))
        .await;

    let result = match outcome {
        Outcome::Calculated(result) => result,
        other => panic!("Expected a calculation, got {:?}", other),
    };
    assert_eq!(result.bmi, 22.86);
    assert_eq!(result.category, "Normal weight");

    let view = controller.view();
    assert!(view.result_visible);
    assert!(!view.error_visible);
    assert_eq!(view.bmi_text.as_deref(), Some("22.86"));
    assert_eq!(view.category_text.as_deref(), Some("Normal weight"));
    assert_eq!(view.category_color.as_deref(), Some("#5cb85c"));
    assert_eq!(view.history.as_ref().map(HistoryListing::item_count), Some(1));

    // Ready plus one refresh after the calculation
    assert_eq!(stub.history_calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        stub.requests.lock().unwrap().as_slice(),
        &[json!({ "weight": 70.0, "height": 175.0 })]
    );
}

#[tokio::test]
async fn test_history_order_reaches_chart() {
    initialize();

    let stub = Arc::new(StubServer::default());
    let addr = serve(stub_router(stub.clone())).await;
    let mut controller = controller_for(addr);

    for (weight, height) in [("50", "180"), ("80", "180"), ("110", "180")] {
        controller
            .dispatch(PageEvent::Submit(FormSubmission::new(weight, height)))
            .await;
    }

    let chart = controller.chart().backend().last_chart().unwrap();
    assert_eq!(
        chart.labels,
        vec!["2024-03-01 12:00:03", "2024-03-01 12:00:02", "2024-03-01 12:00:01"]
    );
    assert_eq!(chart.values(), &[33.95, 24.69, 15.43]);
    assert_eq!(controller.chart().backend().attached(), 1);
    assert_eq!(controller.chart().backend().created(), 3);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_server() {
    initialize();

    let stub = Arc::new(StubServer::default());
    let addr = serve(stub_router(stub.clone())).await;
    let mut controller = controller_for(addr);

    let outcome = controller
        .dispatch(PageEvent::Submit(FormSubmission::new("-70", "175")))
        .await;

    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert_eq!(controller.view().error_text.as_deref(), Some(VALIDATION_MESSAGE));
    assert_eq!(stub.calculate_calls.load(Ordering::SeqCst), 0);
    assert_eq!(stub.history_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_error_message_is_displayed() {
    initialize();

    let router = Router::new()
        .route(
            "/calculate",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid input. Please enter numeric values for weight and height." })),
                )
            }),
        )
        .route("/history", get(|| async { Json(json!([])) }));
    let addr = serve(router).await;
    let mut controller = controller_for(addr);

    let outcome = controller
        .submit_measurement(&FormSubmission::new("70", "175"))
        .await;

    assert!(matches!(
        outcome,
        Outcome::Failed(ApiError::Server { status: 400, .. })
    ));
    let view = controller.view();
    assert!(view.error_visible);
    assert!(!view.result_visible);
    assert_eq!(
        view.error_text.as_deref(),
        Some("Invalid input. Please enter numeric values for weight and height.")
    );
    assert_eq!(view.history_renders, 0);
}

#[tokio::test]
async fn test_unreadable_error_shows_generic_message() {
    initialize();

    let router = Router::new().route(
        "/calculate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let addr = serve(router).await;
    let mut controller = controller_for(addr);

    let outcome = controller
        .submit_measurement(&FormSubmission::new("70", "175"))
        .await;

    assert!(matches!(outcome, Outcome::Failed(ApiError::Decode(_))));
    assert_eq!(
        controller.view().error_text.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    initialize();

    // Bind then drop to get a port nothing listens on
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let mut controller = controller_for(addr);

    let outcome = controller.dispatch(PageEvent::Ready).await;
    assert!(matches!(
        outcome,
        Outcome::HistoryUnavailable(ApiError::Transport(_))
    ));
    assert_eq!(controller.view().history_renders, 0);

    let outcome = controller
        .submit_measurement(&FormSubmission::new("70", "175"))
        .await;
    assert!(matches!(outcome, Outcome::Failed(ApiError::Transport(_))));
    assert_eq!(
        controller.view().error_text.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn test_history_server_error_is_not_rendered() {
    initialize();

    let router = Router::new().route(
        "/history",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "db locked" }))) }),
    );
    let addr = serve(router).await;
    let mut controller = controller_for(addr);

    let outcome = controller.load_history().await;

    assert!(matches!(outcome, Outcome::HistoryUnavailable(_)));
    assert!(controller.view().history.is_none());
    assert!(controller.chart().current().is_none());
}
