use crate::conf::Conf;
use crate::db;
use crate::routes;
use crate::trace;

use axum::{routing::get, Extension, Router};
use static_routes::*;

pub fn router(db: cozo::DbInstance, conf: Conf) -> Router {
    let api = routes().api;

    let api_router = Router::new()
        .route(api.health_check.get().postfix(), get(routes::health_check))
        .route(api.articles.get().postfix(), get(routes::article_list))
        .route("/articles/:id", get(routes::article_by_id));

    Router::new()
        .nest("/api", api_router)
        .route(
            "/static/articles_images/*path",
            get(routes::article_image),
        )
        .layer(Extension(db))
        .layer(Extension(conf))
        .layer(trace::request_trace_layer())
}

pub struct Application {
    port: u16,
    host: String,
    db: cozo::DbInstance,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
}

impl Application {
    pub async fn build(conf: &Conf) -> Self {
        let address = format!("{}:{}", conf.host, conf.port);
        let listener = std::net::TcpListener::bind(&address).expect("port must be free");
        tracing::info!("Listening on http://{}", address);
        let host = conf.host.clone();
        let port = listener.local_addr().unwrap().port();

        let db = db::start_db(conf);

        let app = router(db.clone(), conf.clone());

        let server = Box::pin(
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service()),
        );

        Self {
            port,
            host,
            db,
            server,
        }
    }

    // needs to consume to produce 1 server max
    pub fn server(self) -> impl std::future::Future<Output = hyper::Result<()>> + Send {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn db(&self) -> cozo::DbInstance {
        self.db.clone()
    }
}
