//! Canned Jira REST API v2 payloads.

use serde_json::{Value, json};

/// A full issue record as returned by `GET /issue/{key}`.
pub fn issue(key: &str, summary: &str, status: &str) -> Value {
  json!({
    "id": "10000",
    "key": key,
    "self": format!("https://jira.example.com/rest/api/2/issue/{key}"),
    "fields": {
      "summary": summary,
      "description": "Steps to reproduce are in the attached log.",
      "status": {
        "id": "3",
        "name": status,
        "statusCategory": { "id": 4, "key": "indeterminate", "name": "In Progress" }
      },
      "issuetype": { "id": "1", "name": "Bug", "subtask": false },
      "priority": { "id": "2", "name": "High" },
      "assignee": {
        "name": "jdoe",
        "displayName": "Jane Doe",
        "emailAddress": "jane.doe@example.com"
      },
      "reporter": {
        "name": "rroe",
        "displayName": "Richard Roe",
        "emailAddress": "richard.roe@example.com"
      },
      "created": "2024-03-01T09:15:00.000+0000",
      "updated": "2024-03-02T16:40:00.000+0000",
      "labels": ["backend"]
    }
  })
}

/// The body of `GET /issue/{key}/transitions` for `(id, destination status)` pairs.
pub fn transitions(pairs: &[(&str, &str)]) -> Value {
  let transitions: Vec<Value> = pairs
    .iter()
    .map(|(id, to)| {
      json!({
        "id": id,
        "name": format!("Move to {to}"),
        "to": { "id": format!("status-{id}"), "name": to }
      })
    })
    .collect();
  json!({ "expand": "transitions", "transitions": transitions })
}

/// A comment record.
pub fn comment(id: &str, body: &str) -> Value {
  json!({
    "id": id,
    "body": body,
    "author": {
      "name": "jdoe",
      "displayName": "Jane Doe",
      "emailAddress": "jane.doe@example.com"
    },
    "created": "2024-03-03T10:00:00.000+0000",
    "updated": "2024-03-03T10:00:00.000+0000"
  })
}

/// A project record as returned by `GET /project/{key}`.
pub fn project(key: &str, issue_types: &[&str]) -> Value {
  let issue_types: Vec<Value> = issue_types
    .iter()
    .enumerate()
    .map(|(index, name)| json!({ "id": (index + 1).to_string(), "name": name, "subtask": false }))
    .collect();
  json!({
    "id": "10000",
    "key": key,
    "name": format!("{key} project"),
    "projectTypeKey": "software",
    "avatarUrls": { "48x48": format!("https://jira.example.com/avatar/{key}.png") },
    "issueTypes": issue_types
  })
}

/// The body of `GET /myself`.
pub fn current_user() -> Value {
  json!({
    "name": "jdoe",
    "key": "jdoe",
    "displayName": "Jane Doe",
    "emailAddress": "jane.doe@example.com",
    "active": true,
    "timeZone": "Europe/Berlin"
  })
}

/// A Jira error body with the given messages.
pub fn error_body(messages: &[&str]) -> Value {
  json!({ "errorMessages": messages, "errors": {} })
}
