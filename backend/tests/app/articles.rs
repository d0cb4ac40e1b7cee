use crate::helpers::{sample_article, spawn_app};
use hyper::StatusCode;
use interfacing::{ApiResponse, Article};
use static_routes::*;

#[tokio::test]
async fn articles_are_listed_newest_first() {
    let app = spawn_app().await;
    app.seed_articles(1..=7);

    let response = app
        .get(routes().api.articles)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());

    let body: ApiResponse<Vec<Article>> = response.json().await.unwrap();
    assert!(body.success);
    assert_eq!("Articles retrieved successfully", body.message);

    let data = claim::assert_some!(body.data);
    let ids = data.iter().map(|a| a.id).collect::<Vec<_>>();
    assert_eq!(vec![7, 6, 5, 4, 3, 2, 1], ids);
}

#[tokio::test]
async fn article_by_id_returns_the_row() {
    let app = spawn_app().await;
    app.seed_articles(1..=3);

    let response = app
        .get_article(2)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());

    let body: ApiResponse<Article> = response.json().await.unwrap();
    assert!(body.success);

    let article = claim::assert_some!(body.data);
    assert_eq!(2, article.id);
    assert_eq!("Title 2", article.title_en);
    assert_eq!("Content of article 2", article.content_en);
}

#[tokio::test]
async fn listing_projects_english_columns() {
    let app = spawn_app().await;

    let mut bilingual = sample_article(1);
    bilingual.title_ar = "عنوان".into();
    bilingual.content_ar = "محتوى".into();
    backend::db::q::put_article(&app.db, bilingual).unwrap();

    let response = app
        .get(routes().api.articles)
        .send()
        .await
        .expect("Failed to execute request.");

    let body: ApiResponse<Vec<Article>> = response.json().await.unwrap();
    let data = claim::assert_some!(body.data);

    // the stored Arabic pair does not reach the wire
    assert_eq!("", data[0].title_ar);
    assert_eq!("", data[0].content_ar);
    assert_eq!("Title 1", data[0].title_en);
}

#[tokio::test]
async fn missing_article_returns_not_found() {
    let app = spawn_app().await;
    app.seed_articles(1..=3);

    let response = app
        .get_article(999)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: ApiResponse<Article> = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.data.is_none());
    assert_eq!("Article not found", body.message);
}

#[tokio::test]
async fn put_article_is_an_upsert() {
    let app = spawn_app().await;

    backend::db::q::put_article(&app.db, sample_article(1)).unwrap();
    let mut updated = sample_article(1);
    updated.title_en = "Updated title".into();
    backend::db::q::put_article(&app.db, updated).unwrap();

    let articles = backend::db::q::find_articles(&app.db).unwrap();
    assert_eq!(1, articles.len());
    assert_eq!("Updated title", articles[0].title_en);
}
