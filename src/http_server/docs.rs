//! # API Documentation
//!
//! OpenAPI 3 document generated from the route table, plus a Swagger UI
//! page that renders it.

use axum::{extract::State, response::Html, Json};
use serde_json::{json, Map, Value};

use super::routes::{BodyDoc, RouteDoc, RouteEntry};
use super::server::SharedState;

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Students API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub async fn api_doc_json(State(state): State<SharedState>) -> Json<Value> {
    Json(state.api_doc.as_ref().clone())
}

pub async fn api_doc_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// Build the OpenAPI document for every documented route in `routes`
pub fn openapi_document(routes: &[RouteEntry]) -> Value {
    let mut paths = Map::new();
    for route in routes {
        let Some(doc) = &route.doc else {
            continue;
        };
        let item = paths
            .entry(openapi_path(route.path))
            .or_insert_with(|| Value::Object(Map::new()));
        let method = route.method.as_str().to_ascii_lowercase();
        item[method.as_str()] = operation(route.path, doc);
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Students API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
        "components": {
            "schemas": {
                "Student": student_schema(),
            }
        }
    })
}

/// `/students/get/:id` -> `/students/get/{id}`
pub fn openapi_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn operation(path: &str, doc: &RouteDoc) -> Value {
    let mut op = json!({
        "tags": [doc.tag],
        "description": doc.description,
    });

    let parameters: Vec<Value> = path
        .split('/')
        .filter_map(|segment| segment.strip_prefix(':'))
        .map(|name| {
            json!({
                "name": name,
                "in": "path",
                "required": true,
                "schema": { "type": "integer", "minimum": 0 },
            })
        })
        .collect();
    if !parameters.is_empty() {
        op["parameters"] = Value::Array(parameters);
    }

    if let Some(body) = doc.request {
        op["requestBody"] = json!({
            "required": true,
            "content": { "application/json": { "schema": body_schema(body) } },
        });
    }

    let mut responses = Map::new();
    for response in &doc.responses {
        responses.insert(
            response.status.to_string(),
            json!({
                "description": response.description,
                "content": { (content_type(response.body)): { "schema": body_schema(response.body) } },
            }),
        );
    }
    op["responses"] = Value::Object(responses);

    op
}

fn content_type(body: BodyDoc) -> &'static str {
    match body {
        BodyDoc::Text => "text/plain",
        BodyDoc::Html => "text/html",
        BodyDoc::Student | BodyDoc::StudentList => "application/json",
    }
}

fn body_schema(body: BodyDoc) -> Value {
    match body {
        BodyDoc::Text | BodyDoc::Html => json!({ "type": "string" }),
        BodyDoc::Student => json!({ "$ref": "#/components/schemas/Student" }),
        BodyDoc::StudentList => json!({
            "type": "array",
            "items": { "$ref": "#/components/schemas/Student" },
        }),
    }
}

fn student_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "readOnly": true },
            "name": { "type": "string", "maxLength": 120 },
            "email": { "type": "string", "maxLength": 120 },
            "age": { "type": "integer" },
            "cellphone": { "type": "string", "maxLength": 13 },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_server::routes::route_table;

    #[test]
    fn test_ui_page_mounts_swagger_on_document() {
        assert!(SWAGGER_UI_PAGE.contains(r##"dom_id: "#swagger-ui""##));
        assert!(SWAGGER_UI_PAGE.contains(r#"url: "/api-json""#));
        assert!(SWAGGER_UI_PAGE.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_openapi_path() {
        assert_eq!(openapi_path("/api/students/get/:id"), "/api/students/get/{id}");
        assert_eq!(openapi_path("/"), "/");
    }

    #[test]
    fn test_document_lists_documented_routes() {
        let doc = openapi_document(&route_table());
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/api/health-check/bad"));
        assert!(paths["/api/students/modify/{id}"].get("patch").is_some());
        assert!(paths["/api/students/change/{id}"].get("put").is_some());
        assert!(paths["/api/students/delete/{id}"].get("delete").is_some());
        assert!(!paths.contains_key("/api-json"));
        assert!(!paths.contains_key("/api"));
    }

    #[test]
    fn test_path_parameters_and_responses() {
        let doc = openapi_document(&route_table());
        let get = &doc["paths"]["/api/students/get/{id}"]["get"];

        assert_eq!(get["parameters"][0]["name"], "id");
        assert_eq!(get["parameters"][0]["in"], "path");
        assert!(get["responses"].get("404").is_some());
        assert_eq!(
            doc["paths"]["/api/students/add"]["post"]["responses"]["201"]["content"]
                ["application/json"]["schema"]["$ref"],
            "#/components/schemas/Student"
        );
    }
}
