use axum::http::Method;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::{ServerError, ServerResult};
use crate::handler::{self, AppState};

/// Collection resource name; the only top-level path the service serves.
pub const COLLECTION: &str = "students";

/// Route table as `(method, path, operation)`, used for `roster routes`.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/students", "list"),
    ("POST", "/students", "create"),
    ("GET", "/students/{id}", "get"),
    ("PUT", "/students/{id}", "update"),
    ("DELETE", "/students/{id}", "delete"),
];

/// A resolved request target. Item routes carry the raw id segment; the
/// handler decides whether it is a valid id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Get { id: String },
    Update { id: String },
    Delete { id: String },
}

impl Route {
    /// Map a method and URI path to a route.
    ///
    /// Leading and trailing `/` are trimmed before matching, so `/students/`
    /// and `students` are the same route. Everything after `students/` is
    /// the id segment, including further slashes.
    pub fn resolve(method: &Method, path: &str) -> ServerResult<Self> {
        let trimmed = path.trim_matches('/');

        if trimmed == COLLECTION {
            return match *method {
                Method::GET => Ok(Self::List),
                Method::POST => Ok(Self::Create),
                _ => Err(not_found(path)),
            };
        }

        let Some(segment) = trimmed
            .strip_prefix(COLLECTION)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return Err(not_found(path));
        };

        let id = segment.to_string();
        match *method {
            Method::GET => Ok(Self::Get { id }),
            Method::PUT => Ok(Self::Update { id }),
            Method::DELETE => Ok(Self::Delete { id }),
            _ => Err(ServerError::MethodNotAllowed {
                method: method.to_string(),
            }),
        }
    }
}

fn not_found(path: &str) -> ServerError {
    ServerError::RouteNotFound {
        path: path.to_string(),
    }
}

/// Build the axum router. Every request goes through [`Route::resolve`],
/// so the router itself registers no paths.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handler::dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(method: Method, path: &str) -> ServerResult<Route> {
        Route::resolve(&method, path)
    }

    #[test]
    fn collection_routes() {
        assert_eq!(resolve(Method::GET, "/students").unwrap(), Route::List);
        assert_eq!(resolve(Method::POST, "/students").unwrap(), Route::Create);
    }

    #[test]
    fn slashes_are_trimmed() {
        assert_eq!(resolve(Method::GET, "/students/").unwrap(), Route::List);
        assert_eq!(resolve(Method::GET, "//students//").unwrap(), Route::List);
        assert_eq!(
            resolve(Method::GET, "/students/5/").unwrap(),
            Route::Get { id: "5".into() }
        );
    }

    #[test]
    fn item_routes_carry_raw_segment() {
        assert_eq!(
            resolve(Method::GET, "/students/7").unwrap(),
            Route::Get { id: "7".into() }
        );
        assert_eq!(
            resolve(Method::PUT, "/students/abc").unwrap(),
            Route::Update { id: "abc".into() }
        );
        assert_eq!(
            resolve(Method::DELETE, "/students/1/2").unwrap(),
            Route::Delete { id: "1/2".into() }
        );
    }

    #[test]
    fn wrong_method_on_item_is_405() {
        for method in [Method::POST, Method::PATCH, Method::HEAD, Method::OPTIONS] {
            let err = resolve(method, "/students/1").unwrap_err();
            assert!(matches!(err, ServerError::MethodNotAllowed { .. }));
        }
    }

    #[test]
    fn wrong_method_on_collection_is_404() {
        for method in [Method::PUT, Method::DELETE, Method::PATCH] {
            let err = resolve(method, "/students").unwrap_err();
            assert!(matches!(err, ServerError::RouteNotFound { .. }));
        }
    }

    #[test]
    fn unknown_paths_are_404() {
        for path in ["/", "", "/teachers", "/studentsx", "/studentsx/1", "/api/students"] {
            let err = resolve(Method::GET, path).unwrap_err();
            assert!(matches!(err, ServerError::RouteNotFound { .. }), "{path}");
        }
    }

    #[test]
    fn route_table_covers_every_operation() {
        let ops: Vec<_> = ROUTES.iter().map(|(_, _, op)| *op).collect();
        assert_eq!(ops, ["list", "create", "get", "update", "delete"]);
    }
}
