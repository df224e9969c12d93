//! # Route Table
//!
//! Every endpoint is registered here once, as (verb, path, handler) plus
//! optional documentation. The axum router and the OpenAPI document are
//! both built from this table.

use axum::{
    http::Method,
    routing::{delete, get, patch, post, put, MethodRouter},
    Router,
};

use super::common_routes::{health_bad, health_ok, home};
use super::docs::{api_doc_json, api_doc_ui};
use super::server::SharedState;
use super::student_routes::{
    add_student, change_student, delete_student, get_student, list_students, modify_student,
};

/// Shape of a documented request or response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyDoc {
    Text,
    Html,
    Student,
    StudentList,
}

/// One documented response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseDoc {
    pub status: u16,
    pub description: &'static str,
    pub body: BodyDoc,
}

impl ResponseDoc {
    pub const fn new(status: u16, description: &'static str, body: BodyDoc) -> Self {
        Self {
            status,
            description,
            body,
        }
    }
}

/// Documentation attached to a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDoc {
    pub tag: &'static str,
    pub description: &'static str,
    pub request: Option<BodyDoc>,
    pub responses: Vec<ResponseDoc>,
}

/// A registered endpoint
pub struct RouteEntry {
    pub method: Method,
    /// axum path syntax, parameters as `:name`
    pub path: &'static str,
    pub doc: Option<RouteDoc>,
    handler: MethodRouter<SharedState>,
}

impl RouteEntry {
    pub fn new(method: Method, path: &'static str, handler: MethodRouter<SharedState>) -> Self {
        Self {
            method,
            path,
            doc: None,
            handler,
        }
    }

    pub fn documented(
        mut self,
        tag: &'static str,
        description: &'static str,
        request: Option<BodyDoc>,
        responses: &[ResponseDoc],
    ) -> Self {
        self.doc = Some(RouteDoc {
            tag,
            description,
            request,
            responses: responses.to_vec(),
        });
        self
    }
}

const SERVER_ERROR: ResponseDoc = ResponseDoc::new(500, "Server error", BodyDoc::Text);
const NOT_FOUND: ResponseDoc = ResponseDoc::new(404, "Student not found", BodyDoc::Text);

/// The complete route table
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new(Method::GET, "/", get(home)).documented(
            "common",
            "main page",
            None,
            &[ResponseDoc::new(200, "Ok", BodyDoc::Html), SERVER_ERROR],
        ),
        RouteEntry::new(Method::GET, "/api-json", get(api_doc_json)),
        RouteEntry::new(Method::GET, "/api", get(api_doc_ui)),
        RouteEntry::new(Method::GET, "/api/health-check/ok", get(health_ok)).documented(
            "common",
            "check health ok",
            None,
            &[ResponseDoc::new(200, "Ok", BodyDoc::Text), SERVER_ERROR],
        ),
        RouteEntry::new(Method::GET, "/api/health-check/bad", get(health_bad)).documented(
            "common",
            "check health bad",
            None,
            &[SERVER_ERROR],
        ),
        RouteEntry::new(Method::GET, "/api/students", get(list_students)).documented(
            "students",
            "Get list of all students",
            None,
            &[ResponseDoc::new(200, "Ok", BodyDoc::StudentList), SERVER_ERROR],
        ),
        RouteEntry::new(Method::GET, "/api/students/get/:id", get(get_student)).documented(
            "students",
            "Get one student by id",
            None,
            &[
                ResponseDoc::new(200, "Ok", BodyDoc::Student),
                NOT_FOUND,
                SERVER_ERROR,
            ],
        ),
        RouteEntry::new(Method::POST, "/api/students/add", post(add_student)).documented(
            "students",
            "Add a new student",
            Some(BodyDoc::Student),
            &[
                ResponseDoc::new(201, "Created", BodyDoc::Student),
                SERVER_ERROR,
            ],
        ),
        RouteEntry::new(Method::PATCH, "/api/students/modify/:id", patch(modify_student))
            .documented(
                "students",
                "Modify student data",
                Some(BodyDoc::Student),
                &[
                    ResponseDoc::new(200, "Ok", BodyDoc::Student),
                    NOT_FOUND,
                    SERVER_ERROR,
                ],
            ),
        RouteEntry::new(Method::PUT, "/api/students/change/:id", put(change_student))
            .documented(
                "students",
                "Change all student data; omitted fields are reset to empty or zero",
                Some(BodyDoc::Student),
                &[
                    ResponseDoc::new(200, "Ok", BodyDoc::Student),
                    NOT_FOUND,
                    SERVER_ERROR,
                ],
            ),
        RouteEntry::new(Method::DELETE, "/api/students/delete/:id", delete(delete_student))
            .documented(
                "students",
                "Delete student",
                None,
                &[
                    ResponseDoc::new(200, "Ok", BodyDoc::Text),
                    NOT_FOUND,
                    SERVER_ERROR,
                ],
            ),
    ]
}

/// Register every entry of `table` on a fresh router
pub fn build_router(table: Vec<RouteEntry>) -> Router<SharedState> {
    table
        .into_iter()
        .fold(Router::new(), |router, entry| router.route(entry.path, entry.handler))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let table = route_table();
        let paths: HashSet<_> = table.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), table.len());
    }

    #[test]
    fn test_student_routes_live_under_api() {
        for entry in route_table() {
            if entry.doc.as_ref().map(|d| d.tag) == Some("students") {
                assert!(entry.path.starts_with("/api/students"), "{}", entry.path);
            }
        }
    }

    #[test]
    fn test_doc_endpoints_are_not_documented() {
        let table = route_table();
        for path in ["/api-json", "/api"] {
            let entry = table.iter().find(|e| e.path == path).unwrap();
            assert!(entry.doc.is_none());
        }
    }
}
