//! wiremock-based GitHub API fixtures shared across tests.
//!
//! Payload builders return `serde_json::Value` so individual tests can graft
//! on the extra fields they exercise (`sub_issues_summary`, `parent`, ...).

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct GitHubMock {
    pub server: MockServer,
}

impl GitHubMock {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub async fn mount_issue(&self, number: u64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/acme/widgets/issues/{number}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount the comments endpoint as a sequence of pages chained with
    /// `Link: rel="next"` headers. `page_sizes[i]` is the record count of
    /// page `i + 1`; comment ids run sequentially across pages.
    pub async fn mount_paged_comments(&self, number: u64, page_sizes: &[usize]) {
        let comments_path = format!("/repos/acme/widgets/issues/{number}/comments");
        let mut next_id: u64 = 1;
        let mut templates = Vec::new();

        for (index, size) in page_sizes.iter().enumerate() {
            let records: Vec<Value> = (0..*size)
                .map(|_| {
                    let id = next_id;
                    next_id += 1;
                    comment_json(id, "alice", &format!("comment {id}"))
                })
                .collect();

            let mut template = ResponseTemplate::new(200).set_body_json(json!(records));
            if index + 1 < page_sizes.len() {
                template = template.insert_header(
                    "link",
                    format!(
                        "<{}{}?page={}>; rel=\"next\"",
                        self.base_url(),
                        comments_path,
                        index + 2
                    )
                    .as_str(),
                );
            }
            templates.push(template);
        }

        // Later pages carry a query-param matcher, so mount them first; the
        // bare path mock for page 1 goes last.
        for (index, template) in templates.into_iter().enumerate().rev() {
            let mock = Mock::given(method("GET")).and(path(comments_path.clone()));
            if index == 0 {
                mock.respond_with(template).mount(&self.server).await;
            } else {
                mock.and(query_param("page", (index + 1).to_string()))
                    .respond_with(template)
                    .mount(&self.server)
                    .await;
            }
        }
    }

    pub async fn mount_timeline(&self, number: u64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/acme/widgets/issues/{number}/timeline")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

pub fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "html_url": format!("https://github.com/{login}"),
    })
}

pub fn issue_json(base_url: &str, number: u64) -> Value {
    json!({
        "id": 1000 + number,
        "number": number,
        "title": format!("Issue {number}"),
        "user": user_json("alice"),
        "html_url": format!("https://github.com/acme/widgets/issues/{number}"),
        "state": "open",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-03T00:00:00Z",
        "body": "Something is broken.",
        "comments_url": format!("{base_url}/repos/acme/widgets/issues/{number}/comments"),
        "timeline_url": format!("{base_url}/repos/acme/widgets/issues/{number}/timeline"),
    })
}

pub fn comment_json(id: u64, author: &str, body: &str) -> Value {
    json!({
        "id": id,
        "user": user_json(author),
        "body": body,
        "html_url": format!("https://github.com/acme/widgets/issues/1#issuecomment-{id}"),
        "created_at": "2024-01-02T00:00:00Z",
    })
}

pub fn issue_ref_json(number: u64, title: &str) -> Value {
    json!({
        "number": number,
        "title": title,
        "html_url": format!("https://github.com/acme/widgets/issues/{number}"),
        "state": "open",
        "body": "Stub body.",
        "user": user_json("bob"),
    })
}

pub fn event_json(kind: &str) -> Value {
    json!({
        "id": 501,
        "event": kind,
        "actor": user_json("carol"),
        "created_at": "2024-01-02T12:00:00Z",
    })
}
