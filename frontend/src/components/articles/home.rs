use super::feed;
use crate::components::imports::*;
use crate::components::ArticleCard;

pub struct Home {
    articles: Vec<interfacing::Article>,
    query: String,
    // loading is tracked explicitly so an empty collection mid-fetch
    // is not rendered as "no results"
    loading: bool,
}

pub enum Msg {
    ArticlesLoaded(Vec<interfacing::Article>),
    FetchFailed,
    QueryChanged(String),
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            articles: vec![],
            query: String::new(),
            loading: true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let filtered = feed::search(&self.articles, &self.query);
        let feed = feed::partition(&filtered);

        let page_classes = css!(
            "
            max-width: 1100px;
            margin: 0 auto;
            padding: 30px 20px;
        "
        );

        let search_classes = css!(
            "
            max-width: 400px;
            width: 100%;
            padding: 8px 12px;
            border: 1px solid #ccc;
            margin-bottom: 30px;

            :focus {
                border-color: black;
                outline: none;
            }
        "
        );

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::QueryChanged(input.value())
        });

        let featured_block = match feed.featured {
            None => html! {},
            Some(article) => {
                let featured_classes = css!(
                    "
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 30px;
                    margin-bottom: 40px;

                    @media (max-width: 800px) {
                        grid-template-columns: 1fr;
                    }
                "
                );

                let rail_classes = css!(
                    "
                    border-left: 1px solid #e2e2e2;
                    padding-left: 25px;
                "
                );

                let image = match &article.image_url {
                    None => html! {},
                    Some(image_url) => html! {
                        <img
                            src={article_image_src(image_url)}
                            alt={article.title().to_string()}
                            style="width: 100%; height: 280px; object-fit: cover; margin-bottom: 15px;"
                        />
                    },
                };

                let latest = feed
                    .main
                    .iter()
                    .map(|article| {
                        html! {
                            <div key={article.id} style="padding-bottom: 12px; border-bottom: 1px solid #eee; margin-bottom: 12px;">
                                <h4>
                                    <Link<Route> to={Route::ArticleDetail { id: article.id }}>
                                        {article.title()}
                                    </Link<Route>>
                                </h4>
                                <p style="font-size: 80%; color: #666;">{&article.date}</p>
                            </div>
                        }
                    })
                    .collect::<Html>();

                html! {
                    <div class={featured_classes}>
                        <div>
                            {image}
                            <span style="font-size: 80%; color: #666; text-transform: uppercase;">{"Featured"}</span>
                            <h2>{article.title()}</h2>
                            <p>{feed::excerpt(article.content(), 200)}</p>
                            <div style="display: flex; justify-content: space-between;">
                                <span style="font-size: 80%; color: #666;">{&article.date}</span>
                                <Link<Route> to={Route::ArticleDetail { id: article.id }}>
                                    {"Read Full Story →"}
                                </Link<Route>>
                            </div>
                        </div>
                        <div class={rail_classes}>
                            <h3 style="font-size: 85%; color: #666; text-transform: uppercase;">{"Latest Updates"}</h3>
                            {latest}
                        </div>
                    </div>
                }
            }
        };

        let grid_classes = css!(
            "
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 20px;
            margin-bottom: 40px;
        "
        );

        let main_grid = feed
            .main
            .iter()
            .map(|article| {
                html! {
                    <ArticleCard key={article.id} article={(*article).clone()}/>
                }
            })
            .collect::<Html>();

        let remaining_block = if feed.remaining.is_empty() {
            html! {}
        } else {
            let rows = feed
                .remaining
                .iter()
                .map(|article| {
                    html! {
                        <div key={article.id} style="padding: 15px 0; border-bottom: 1px solid #eee;">
                            <h4>
                                <Link<Route> to={Route::ArticleDetail { id: article.id }}>
                                    {article.title()}
                                </Link<Route>>
                            </h4>
                            <p>{feed::excerpt(article.content(), 120)}</p>
                            <span style="font-size: 80%; color: #666;">{&article.date}</span>
                        </div>
                    }
                })
                .collect::<Html>();

            html! {
                <div>
                    <h3>{"More Stories"}</h3>
                    {rows}
                </div>
            }
        };

        let loading_block = if self.loading {
            html! {
                <div style="text-align: center; padding: 50px 0; color: #666;">
                    {"Loading stories..."}
                </div>
            }
        } else {
            html! {}
        };

        let empty_block = if !self.loading && filtered.is_empty() {
            html! {
                <div style="text-align: center; padding: 50px 0; color: #666;">
                    {"No articles found. Try a different search term."}
                </div>
            }
        } else {
            html! {}
        };

        html! {
            <div class={page_classes}>
                <input
                    class={search_classes}
                    type="text"
                    placeholder="Search articles..."
                    value={self.query.clone()}
                    {oninput}
                />

                {featured_block}

                <div style="display: flex; justify-content: space-between; align-items: center;">
                    <h2>{"Top Stories"}</h2>
                    <span style="font-size: 85%; color: #666;">
                        {format!("{} articles", filtered.len())}
                    </span>
                </div>
                <div class={grid_classes}>
                    {main_grid}
                </div>

                {remaining_block}
                {loading_block}
                {empty_block}
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_future(async {
                match fetch_article_list().await {
                    Ok(articles) => Msg::ArticlesLoaded(articles),
                    Err(e) => {
                        console::log!(format!("failed to fetch articles: {e}"));
                        Msg::FetchFailed
                    }
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ArticlesLoaded(articles) => {
                self.articles = articles;
                self.loading = false;
                true
            }
            Self::Message::FetchFailed => {
                self.loading = false;
                true
            }
            Self::Message::QueryChanged(query) => {
                self.query = query;
                true
            }
        }
    }
}

async fn fetch_article_list() -> Result<Vec<interfacing::Article>, FetchError> {
    let response = Request::static_get(routes().api.articles)
        .send()
        .await
        .map_err(FetchError::RequestError)?;

    if response.status() != 200 {
        response.log_status();
        return Err(FetchError::StatusError(response.status()));
    }

    let body = response
        .json::<interfacing::ApiResponse<Vec<interfacing::Article>>>()
        .await
        .map_err(FetchError::ParseError)?;

    Ok(body.data.unwrap_or_default())
}
