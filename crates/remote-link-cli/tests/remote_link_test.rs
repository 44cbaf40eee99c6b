//! End-to-end tests: GitHub event payload in, Jira remote link requests out.
//!
//! Jira is replaced by an httpmock server; reports are captured from an
//! in-memory workflow command writer.

use httpmock::prelude::*;
use remote_link_core::{Linker, Outcome};
use remote_link_github::{parse_event, ActionsReporter};
use remote_link_jira::JiraClient;

const OPENED_ICON: &str =
    "https://raw.githubusercontent.com/carlsberg/jira-remote-link-action/main/assets/opened.png?raw=true";

fn issues_payload(action: &str, title: &str, body: &str, state: &str) -> String {
    serde_json::json!({
        "action": action,
        "issue": {
            "number": 5,
            "title": title,
            "body": body,
            "html_url": "https://github.com/acme/widgets/issues/5",
            "state": state
        },
        "repository": {"full_name": "acme/widgets"}
    })
    .to_string()
}

fn create_client(server: &MockServer) -> JiraClient {
    JiraClient::with_base_url(server.base_url(), "bot@acme.com", "api-token").unwrap()
}

fn commands(reporter: ActionsReporter<Vec<u8>>) -> Vec<String> {
    String::from_utf8(reporter.into_inner())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_created_issue_links_mentioned_key() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/issue/PROJ-7/remotelink")
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "globalId": "source=GitHub-jira-remote-link-action&repo=acme/widgets&issue=5",
                "application": {"name": "GitHub"},
                "jira-token": {
                    "url": "https://github.com/acme/widgets/issues/5",
                    "title": "Add feature (acme/widgets#5)",
                    "icon": {"title": "Opened", "url16x16": OPENED_ICON},
                    "status": {
                        "icon": {"title": "Opened", "url16x16": OPENED_ICON},
                        "resolved": false
                    }
                },
                "relationship": "links to"
            }));
        then.status(201).json_body(serde_json::json!({"id": 10000}));
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event(
        "issues",
        &issues_payload("created", "Add feature", "Relates to PROJ-7", "open"),
    )
    .unwrap();

    let outcome = Linker::new(&client, &reporter).handle(&event).await;

    mock.assert();
    assert_eq!(
        outcome,
        Outcome::Published {
            attempted: 1,
            failed: 0
        }
    );
    assert!(!reporter.has_failed());
    assert!(commands(reporter).is_empty());
}

#[tokio::test]
async fn test_closed_issue_is_resolved() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/issue/OPS-12/remotelink")
            .body_includes("\"resolved\":true")
            .body_includes("\"title\":\"Closed\"");
        then.status(201);
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event(
        "issues",
        &issues_payload("edited", "OPS-12 outage follow-up", "", "closed"),
    )
    .unwrap();

    Linker::new(&client, &reporter).handle(&event).await;

    mock.assert();
}

#[tokio::test]
async fn test_failing_key_does_not_block_next_key() {
    let server = MockServer::start();

    let failing = server.mock(|when, then| {
        when.method(POST).path("/issue/GONE-1/remotelink");
        then.status(404)
            .body("{\"errorMessages\":[\"Issue does not exist or you do not have permission to see it.\"]}");
    });
    let succeeding = server.mock(|when, then| {
        when.method(POST).path("/issue/PROJ-2/remotelink");
        then.status(201);
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event(
        "issues",
        &issues_payload("edited", "Cleanup", "GONE-1 then PROJ-2", "open"),
    )
    .unwrap();

    let outcome = Linker::new(&client, &reporter).handle(&event).await;

    failing.assert();
    succeeding.assert();
    assert_eq!(
        outcome,
        Outcome::Published {
            attempted: 2,
            failed: 1
        }
    );
    assert!(reporter.has_failed());

    let lines = commands(reporter);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("::error issue=5,jira_key=GONE-1,repo=acme/widgets::API error: 404"));
}

#[tokio::test]
async fn test_duplicate_keys_send_duplicate_requests() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/issue/PROJ-7/remotelink");
        then.status(201);
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event(
        "issues",
        &issues_payload("edited", "PROJ-7: add feature", "Relates to PROJ-7", "open"),
    )
    .unwrap();

    Linker::new(&client, &reporter).handle(&event).await;

    mock.assert_hits(2);
}

#[tokio::test]
async fn test_deleted_issue_sends_nothing() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(201);
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event(
        "issues",
        &issues_payload("deleted", "Add feature", "Relates to PROJ-7", "open"),
    )
    .unwrap();

    let outcome = Linker::new(&client, &reporter).handle(&event).await;

    mock.assert_hits(0);
    assert!(matches!(outcome, Outcome::Ignored { .. }));
    assert!(commands(reporter).is_empty());
}

#[tokio::test]
async fn test_non_issue_event_is_skipped_with_notice() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(201);
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event("pull_request", "{\"action\": \"opened\"}").unwrap();

    let outcome = Linker::new(&client, &reporter).handle(&event).await;

    mock.assert_hits(0);
    assert_eq!(
        outcome,
        Outcome::Skipped {
            event: "pull_request".to_string()
        }
    );
    assert!(!reporter.has_failed());

    let lines = commands(reporter);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("::notice event=pull_request::"));
}

#[tokio::test]
async fn test_unknown_state_reports_and_sends_nothing() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(201);
    });

    let client = create_client(&server);
    let reporter = ActionsReporter::new(Vec::new());
    let event = parse_event(
        "issues",
        &issues_payload("edited", "Add feature", "Relates to PROJ-7", "locked"),
    )
    .unwrap();

    let outcome = Linker::new(&client, &reporter).handle(&event).await;

    mock.assert_hits(0);
    assert!(matches!(outcome, Outcome::Aborted { .. }));
    assert!(reporter.has_failed());
    assert!(commands(reporter)[0].contains("Couldn't detect status from event"));
}
