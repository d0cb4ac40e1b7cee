use crate::routes::imports::*;

#[axum_macros::debug_handler]
pub async fn article_list(
    Extension(db): Extension<cozo::DbInstance>,
) -> ApiResult<Json<ApiResponse<Vec<Article>>>> {
    let articles = spawn_blocking_with_tracing(move || db::q::find_articles(&db))
        .await
        .context("db task failed")??;

    Ok(Json(ApiResponse::success(
        articles,
        "Articles retrieved successfully",
    )))
}

#[axum_macros::debug_handler]
pub async fn article_by_id(
    Extension(db): Extension<cozo::DbInstance>,
    Path(id): Path<i64>,
) -> ApiResult<Response> {
    let article = spawn_blocking_with_tracing(move || db::q::find_article_by_id(&db, id))
        .await
        .context("db task failed")??;

    let response = match article {
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Article>::failure("Article not found")),
        )
            .into_response(),
        Some(article) => Json(ApiResponse::success(
            article,
            "Article retrieved successfully",
        ))
        .into_response(),
    };

    Ok(response)
}
