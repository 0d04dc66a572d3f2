//! OpenWeather client and location providers against a mock HTTP server.

use pretty_assertions::assert_eq;
use serde_json::json;
use weatherview::{
    action::Action,
    api::{ApiError, OpenWeatherClient},
    location::{CityLocation, IpLocation, LocationError, LocationProvider, Permission},
    state::Coordinates,
    tasks,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCRA: Coordinates = Coordinates { lat: 5.6, lon: -0.2 };

fn current_body() -> serde_json::Value {
    json!({
        "name": "Accra",
        "main": { "temp": 29.4, "humidity": 79 },
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
        ]
    })
}

fn forecast_body(entries: usize) -> serde_json::Value {
    let list: Vec<_> = (0..entries)
        .map(|i| {
            json!({
                "dt": 1_704_110_400 + i as i64 * 10_800,
                "main": { "temp": 25.0 + i as f64 },
                "weather": [{ "main": if i % 2 == 0 { "Rain" } else { "Clear" }, "description": "" }]
            })
        })
        .collect();
    json!({ "cod": "200", "cnt": entries, "list": list })
}

async fn mount_current(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "5.6"))
        .and(query_param("lon", "-0.2"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::with_base_url("test-key", server.uri())
}

// ============================================================================
// Weather endpoints
// ============================================================================

#[tokio::test]
async fn test_current_conditions() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;

    let current = client(&server).current(ACCRA).await.unwrap();

    assert_eq!(current.location_name, "Accra");
    assert_eq!(current.temperature_celsius, 29.4);
    assert_eq!(current.condition_main, "Clouds");
    assert_eq!(current.condition_description, "scattered clouds");
}

#[tokio::test]
async fn test_forecast_keeps_provider_order() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body(3))).await;

    let forecast = client(&server).forecast(ACCRA).await.unwrap();

    let stamps: Vec<_> = forecast.iter().map(|f| f.timestamp).collect();
    assert_eq!(stamps, vec![1_704_110_400, 1_704_121_200, 1_704_132_000]);
    assert_eq!(forecast[1].condition_main, "Clear");
    assert_eq!(forecast[2].temperature_celsius, 27.0);
}

#[tokio::test]
async fn test_report_combines_both_calls() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body(40))).await;

    let report = client(&server).report(ACCRA).await.unwrap();

    assert_eq!(report.current.location_name, "Accra");
    assert_eq!(report.forecast.len(), 40);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({ "cod": 401, "message": "Invalid API key" })),
    )
    .await;

    let err = client(&server).current(ACCRA).await.unwrap_err();

    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let err = client(&server).forecast(ACCRA).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;

    let client = OpenWeatherClient::with_base_url("test-key", format!("{}/", server.uri()));
    assert!(client.current(ACCRA).await.is_ok());
}

// ============================================================================
// Task results
// ============================================================================

#[tokio::test]
async fn test_load_weather_success() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body(40))).await;

    let action = tasks::load_weather(&client(&server), ACCRA).await;

    match action {
        Action::WeatherDidLoad(report) => assert_eq!(report.forecast.len(), 40),
        other => panic!("expected WeatherDidLoad, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_weather_fails_when_forecast_fails() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount_forecast(&server, ResponseTemplate::new(500)).await;

    let action = tasks::load_weather(&client(&server), ACCRA).await;

    assert!(
        matches!(&action, Action::WeatherDidError(msg) if msg.contains("500")),
        "got {action:?}"
    );
}

#[tokio::test]
async fn test_load_weather_fails_when_current_fails() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(503)).await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body(8))).await;

    let action = tasks::load_weather(&client(&server), ACCRA).await;
    assert!(matches!(action, Action::WeatherDidError(_)), "got {action:?}");
}

// ============================================================================
// Location providers
// ============================================================================

#[tokio::test]
async fn test_city_location_geocodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Accra"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Accra", "lat": 5.56, "lon": -0.2, "country": "GH" }
        ])))
        .mount(&server)
        .await;

    let provider = CityLocation::new(client(&server), "Accra");

    assert_eq!(provider.request_permission().await.unwrap(), Permission::Granted);
    assert_eq!(
        provider.current_position().await.unwrap(),
        Coordinates { lat: 5.56, lon: -0.2 }
    );
}

#[tokio::test]
async fn test_city_location_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let provider = CityLocation::new(client(&server), "Atlantis");
    let err = provider.current_position().await.unwrap_err();
    assert!(matches!(err, LocationError::NotFound(ref city) if city == "Atlantis"));

    // Surfaces as a location error, never a denial
    let action = tasks::locate(&provider).await;
    assert!(matches!(action, Action::LocationDidError(_)), "got {action:?}");
}

#[tokio::test]
async fn test_ip_location_resolves() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success", "lat": 5.6, "lon": -0.2, "city": "Accra"
        })))
        .mount(&server)
        .await;

    let provider = IpLocation::with_endpoint(format!("{}/json/", server.uri()), true);
    let action = tasks::locate(&provider).await;

    assert_eq!(action, Action::LocationDidResolve(ACCRA));
}

#[tokio::test]
async fn test_ip_location_lookup_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail", "message": "private range"
        })))
        .mount(&server)
        .await;

    let provider = IpLocation::with_endpoint(format!("{}/json/", server.uri()), true);
    let err = provider.current_position().await.unwrap_err();

    assert_eq!(err.to_string(), LocationError::Unavailable("private range".into()).to_string());
}

#[tokio::test]
async fn test_ip_location_denied_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = IpLocation::with_endpoint(format!("{}/json/", server.uri()), false);
    let action = tasks::locate(&provider).await;

    assert_eq!(action, Action::LocationDidDeny);
}
