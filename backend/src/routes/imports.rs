pub use crate::{
    conf::Conf,
    db,
    error::{ApiError, ApiResult},
    trace::spawn_blocking_with_tracing,
};
pub use static_routes::*;

pub use anyhow::Context;
pub use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
pub use interfacing::{ApiResponse, Article};
