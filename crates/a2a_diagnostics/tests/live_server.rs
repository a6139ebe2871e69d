//! Diagnostics against a local HTTP server through the reqwest adapter.

use std::sync::Arc;
use std::time::Duration;

use a2a_diagnostics::{Diagnostics, ReqwestHttpService};
use a2a_domain::{
    ClientStatus, ConnectionContext, DiagnosticsConfig, EndpointSource, HttpService, ProbeResult,
};
use pretty_assertions::assert_eq;

fn diagnostics() -> Diagnostics {
    let http = Arc::new(ReqwestHttpService::new().unwrap()) as Arc<dyn HttpService>;
    let config = DiagnosticsConfig::default()
        .metadata_timeout(Duration::from_secs(2))
        .send_subscribe_timeout(Duration::from_secs(2));
    Diagnostics::new(config, Some(http))
}

#[tokio::test]
async fn test_report_from_served_agent_card() {
    let mut server = mockito::Server::new_async().await;
    let card = server
        .mock("GET", "/pirate_agent/.well-known/agent.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "Pirate Agent",
                "version": 3,
                "capabilities": {"streaming": true, "pushNotifications": false},
                "skills": [{"id": "translate", "description": "Speaks like a pirate"}]
            }"#,
        )
        .expect(1)
        .create_async()
        .await;
    let base_url = format!("{}/pirate_agent", server.url());
    let context = ConnectionContext::default().base_url(base_url.clone());

    let report = diagnostics().build_report(&context).await;

    card.assert_async().await;
    let agent = report.agent.unwrap();
    assert_eq!(agent.version, "3");
    assert_eq!(
        agent.capabilities.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["streaming"]
    );
    assert_eq!(agent.skills[0].name, "translate");
    assert_eq!(report.rpc_endpoint, Some(format!("{base_url}/rpc")));
    assert_eq!(report.client_status, ClientStatus::Disconnected);
}

#[tokio::test]
async fn test_send_subscribe_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let rpc = server
        .mock("POST", "/agent/rpc")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"jsonrpc": "2.0", "method": "tasks/sendSubscribe"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body("data: {\"jsonrpc\": \"2.0\"}\n\n")
        .create_async()
        .await;
    let context = ConnectionContext::default().base_url(format!("{}/agent", server.url()));

    let actual = diagnostics().probe_send_subscribe(&context, "Ahoy").await;

    rpc.assert_async().await;
    assert_eq!(
        actual,
        Ok(ProbeResult::Resolved {
            endpoint: format!("{}/agent/rpc", server.url()),
            source: EndpointSource::Derived,
        })
    );
}

#[tokio::test]
async fn test_unreachable_server_degrades() {
    let context = ConnectionContext::default().base_url("http://127.0.0.1:1".to_string());
    let diagnostics = diagnostics();

    let report = diagnostics.build_report(&context).await;
    let sse = diagnostics.probe_sse(&context, Some("1")).await;

    assert_eq!(report.agent, None);
    assert_eq!(report.status_message(), "Connected to 127.0.0.1");
    assert!(matches!(sse.result, ProbeResult::Unreachable { .. }));
}
