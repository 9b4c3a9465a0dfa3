//! Tests for the scraper module, against a scripted transport

use super::*;
use crate::error::{Error, FaultKind};
use crate::types::Method;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and records every request
#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("script exhausted".to_string())))
    }
}

fn page(ids: &[&str], has_next_page: bool, end_cursor: Option<&str>) -> Result<String> {
    let edges: Vec<_> = ids.iter().map(|id| json!({"node": {"id": id}})).collect();
    Ok(json!({
        "data": {
            "xdt_api__v1__feed__user_timeline_graphql_connection": {
                "edges": edges,
                "page_info": {"has_next_page": has_next_page, "end_cursor": end_cursor}
            }
        },
        "status": "ok"
    })
    .to_string())
}

fn scraper(responses: Vec<Result<String>>) -> Scraper<ScriptedTransport> {
    Scraper::with_transport(ScraperConfig::default(), ScriptedTransport::new(responses))
}

fn ids(nodes: &[Value]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| node["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Single Post
// ============================================================================

#[tokio::test]
async fn test_scrape_post_request_and_payload() {
    let scraper = scraper(vec![Ok(json!({
        "data": {"xdt_shortcode_media": {"shortcode": "DIH5xdXtbFj"}}
    })
    .to_string())]);

    let post = scraper
        .scrape_post("https://www.instagram.com/p/DIH5xdXtbFj/")
        .await
        .unwrap();
    assert_eq!(post["shortcode"], "DIH5xdXtbFj");

    let requests = scraper.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url, "https://www.instagram.com/graphql/query");
    let form = requests[0].form.as_deref().unwrap();
    assert!(form.starts_with("variables=%7B%22shortcode%22%3A%22DIH5xdXtbFj%22"));
    assert!(form.ends_with("&doc_id=8845758582119845"));
}

#[tokio::test]
async fn test_scrape_post_shape_fault() {
    let scraper = scraper(vec![Ok(json!({"data": {}}).to_string())]);
    let err = scraper.scrape_post("abc").await.unwrap_err();
    assert_eq!(err.fault_kind(), FaultKind::Shape);
}

#[tokio::test]
async fn test_scrape_post_rejection() {
    let scraper = scraper(vec![Err(Error::http_status(401, "login_required"))]);
    let err = scraper.scrape_post("abc").await.unwrap_err();
    assert_eq!(err.fault_kind(), FaultKind::Rejection);
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_scrape_user() {
    let scraper = scraper(vec![Ok(json!({
        "data": {"user": {"username": "alice", "id": "1"}},
        "status": "ok"
    })
    .to_string())]);

    let user = scraper.scrape_user("alice").await.unwrap();
    assert_eq!(user["username"], "alice");

    let requests = scraper.transport().requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(
        requests[0].url,
        "https://i.instagram.com/api/v1/users/web_profile_info/"
    );
    assert_eq!(
        requests[0].query,
        vec![("username".to_string(), "alice".to_string())]
    );
    assert!(requests[0].form.is_none());
}

// ============================================================================
// Timeline
// ============================================================================

#[tokio::test]
async fn test_timeline_yields_all_pages_in_order() {
    let scraper = scraper(vec![
        page(&["1", "2"], true, Some("c1")),
        page(&["3", "4"], true, Some("c2")),
        page(&["5"], false, None),
    ]);

    let nodes: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(2))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids(&nodes), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(scraper.transport().request_count(), 3);
}

#[tokio::test]
async fn test_timeline_advances_after_variable() {
    let scraper = scraper(vec![
        page(&["1"], true, Some("c1")),
        page(&["2"], false, None),
    ]);

    let _: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(1))
        .try_collect()
        .await
        .unwrap();

    let requests = scraper.transport().requests();
    let first = requests[0].form.as_deref().unwrap();
    let second = requests[1].form.as_deref().unwrap();
    assert!(first.starts_with("variables=%7B%22after%22%3Anull"));
    assert!(second.starts_with("variables=%7B%22after%22%3A%22c1%22"));
    assert!(second.ends_with("&doc_id=9310670392322965"));
}

#[tokio::test]
async fn test_timeline_stops_on_stalled_cursor() {
    let scraper = scraper(vec![
        page(&["1", "2"], true, Some("same")),
        page(&["3", "4"], true, Some("same")),
        page(&["never"], false, None),
    ]);

    let nodes: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(2))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids(&nodes), vec!["1", "2", "3", "4"]);
    assert_eq!(scraper.transport().request_count(), 2);
}

#[tokio::test]
async fn test_timeline_respects_max_pages() {
    let scraper = scraper(vec![
        page(&["1"], true, Some("c1")),
        page(&["2"], true, Some("c2")),
        page(&["3"], true, Some("c3")),
        page(&["4"], true, Some("c4")),
    ]);

    let nodes: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(1).with_max_pages(3))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids(&nodes), vec!["1", "2", "3"]);
    assert_eq!(scraper.transport().request_count(), 3);
}

#[tokio::test]
async fn test_timeline_single_page_example() {
    let scraper = scraper(vec![page(&["a", "b"], true, Some("c1"))]);

    let nodes: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(2).with_max_pages(1))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids(&nodes), vec!["a", "b"]);
    assert_eq!(scraper.transport().request_count(), 1);
}

#[tokio::test]
async fn test_timeline_zero_max_pages_fetches_one_page() {
    let scraper = scraper(vec![
        page(&["a"], true, Some("c1")),
        page(&["never"], false, None),
    ]);

    let nodes: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(1).with_max_pages(0))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids(&nodes), vec!["a"]);
    assert_eq!(scraper.transport().request_count(), 1);
}

#[tokio::test]
async fn test_timeline_is_lazy() {
    let scraper = scraper(vec![
        page(&["1", "2"], true, Some("c1")),
        page(&["3"], false, None),
    ]);

    let mut stream = scraper.scrape_user_posts("alice", TimelineOptions::new(2));
    assert_eq!(scraper.transport().request_count(), 0);

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first["id"], "1");
    assert_eq!(scraper.transport().request_count(), 1);

    let second = stream.next().await.unwrap().unwrap();
    assert_eq!(second["id"], "2");
    assert_eq!(scraper.transport().request_count(), 1);

    let third = stream.next().await.unwrap().unwrap();
    assert_eq!(third["id"], "3");
    assert_eq!(scraper.transport().request_count(), 2);

    assert!(stream.next().await.is_none());
    assert_eq!(scraper.transport().request_count(), 2);
}

#[tokio::test]
async fn test_timeline_dropped_stream_stops_fetching() {
    let scraper = scraper(vec![
        page(&["1", "2"], true, Some("c1")),
        page(&["3"], false, None),
    ]);

    let taken: Vec<Result<Value>> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(2))
        .take(1)
        .collect()
        .await;

    assert_eq!(taken.len(), 1);
    assert_eq!(scraper.transport().request_count(), 1);
}

#[tokio::test]
async fn test_timeline_skips_empty_pages() {
    let scraper = scraper(vec![
        page(&[], true, Some("c1")),
        page(&["1"], false, None),
    ]);

    let nodes: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::default())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids(&nodes), vec!["1"]);
}

#[tokio::test]
async fn test_timeline_error_ends_stream_after_partial_results() {
    let scraper = scraper(vec![
        page(&["1", "2"], true, Some("c1")),
        Err(Error::http_status(429, "Please wait a few minutes")),
        page(&["never"], false, None),
    ]);

    let results: Vec<Result<Value>> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(2))
        .collect()
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap()["id"], "1");
    assert_eq!(results[1].as_ref().unwrap()["id"], "2");
    let err = results[2].as_ref().unwrap_err();
    assert_eq!(err.fault_kind(), FaultKind::Rejection);
    assert_eq!(scraper.transport().request_count(), 2);
}

#[tokio::test]
async fn test_timeline_yields_nodes_before_page_info_fault() {
    let scraper = scraper(vec![
        Ok(json!({
            "data": {
                "xdt_api__v1__feed__user_timeline_graphql_connection": {
                    "edges": [{"node": {"id": "1"}}, {"node": {"id": "2"}}]
                }
            }
        })
        .to_string()),
        page(&["never"], false, None),
    ]);

    let results: Vec<Result<Value>> = scraper
        .scrape_user_posts("alice", TimelineOptions::new(2))
        .collect()
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap()["id"], "1");
    assert_eq!(results[1].as_ref().unwrap()["id"], "2");
    match results[2].as_ref().unwrap_err() {
        Error::Shape { path, .. } => assert_eq!(
            path,
            "data.xdt_api__v1__feed__user_timeline_graphql_connection.page_info"
        ),
        other => panic!("Expected Shape, got {other:?}"),
    }
    assert_eq!(scraper.transport().request_count(), 1);
}

#[tokio::test]
async fn test_timeline_shape_fault() {
    let scraper = scraper(vec![Ok(json!({"data": {"user": null}}).to_string())]);

    let results: Vec<Result<Value>> = scraper
        .scrape_user_posts("alice", TimelineOptions::default())
        .collect()
        .await;

    assert_eq!(results.len(), 1);
    match results[0].as_ref().unwrap_err() {
        Error::Shape { path, .. } => assert_eq!(
            path,
            "data.xdt_api__v1__feed__user_timeline_graphql_connection"
        ),
        other => panic!("Expected Shape, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeline_writes_snapshot() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("page.json");

    let mut config = ScraperConfig::default();
    config.debug.snapshot_path = Some(snapshot_path.clone());
    let scraper = Scraper::with_transport(
        config,
        ScriptedTransport::new(vec![
            page(&["1"], true, Some("c1")),
            page(&["2"], false, None),
        ]),
    );

    let _: Vec<Value> = scraper
        .scrape_user_posts("alice", TimelineOptions::default())
        .try_collect()
        .await
        .unwrap();

    let snapshot: Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    let edges = &snapshot["data"]["xdt_api__v1__feed__user_timeline_graphql_connection"]["edges"];
    assert_eq!(edges[0]["node"]["id"], "2");
}
