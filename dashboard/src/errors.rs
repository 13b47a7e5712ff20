use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use goodbooks_database::CatalogError;
use goodbooks_graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Neo4j is not connected")]
    GraphUnavailable,

    #[error("{0}")]
    Graph(GraphError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    NotFound(String),
}

impl From<GraphError> for ApiError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::InvalidParameter(msg) => ApiError::InvalidParameter(msg),
            other => ApiError::Graph(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::GraphUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Graph(_) | ApiError::Catalog(_) => StatusCode::BAD_GATEWAY,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::GraphUnavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiError::Graph(GraphError::Neo4j("connection reset".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::InvalidParameter("limit".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("no rows".into()).status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_graph_parameter_errors_become_bad_requests() {
        let err: ApiError = GraphError::InvalidParameter("damping must be between 0.1 and 1".into()).into();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
