use backend::conf;
use backend::startup::Application;
use backend::trace::TracingSubscriber;
use once_cell::sync::Lazy;
use reqwest::RequestBuilder;
use static_routes::*;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        TracingSubscriber::new().set_global_default();
    }
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let conf = conf::Conf::new(conf::Env::Local, conf::EnvConf::test_default());

    let application = Application::build(&conf).await;

    let address = format!("http://{}:{}", application.host(), application.port());

    let db = application.db();
    let _ = tokio::spawn(application.server());

    let api_client = reqwest::Client::builder().build().unwrap();

    TestApp {
        address,
        api_client,
        db,
    }
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub db: cozo::DbInstance,
}

impl TestApp {
    pub fn get(&self, static_path: impl Get) -> RequestBuilder {
        self.api_client
            .get(static_path.get().with_base(&self.address).complete())
    }

    pub fn get_article(&self, id: i64) -> RequestBuilder {
        self.api_client
            .get(format!("{}/api/articles/{}", self.address, id))
    }

    pub fn seed_articles(&self, ids: impl IntoIterator<Item = i64>) {
        for id in ids {
            backend::db::q::put_article(&self.db, sample_article(id)).unwrap();
        }
    }
}

pub fn sample_article(id: i64) -> interfacing::Article {
    interfacing::Article {
        id,
        title_en: format!("Title {}", id),
        title_ar: String::new(),
        content_en: format!("Content of article {}", id),
        content_ar: String::new(),
        date: "August 5, 2026".into(),
        category: Some("World".into()),
        image_url: None,
        source_url: format!("https://example.com/{}", id),
        status: "published".into(),
        created_at: "2026-08-05T00:00:00Z".into(),
    }
}
