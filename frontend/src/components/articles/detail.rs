use crate::components::bookmarks::imports::*;
use crate::components::imports::*;

pub struct ArticleDetail {
    id: i64,
    article: Option<interfacing::Article>,
    loading: bool,
    // each fetch carries this token; a response from a superseded
    // request is dropped instead of overwriting the current view
    fetch_seq: usize,
    bookmark_ctx: BookmarkCtxSub,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

pub enum Msg {
    ArticleLoaded {
        seq: usize,
        article: Option<interfacing::Article>,
    },
    BookmarkContextUpdate(BookmarkCtx),
    ToggleBookmark,
}

impl Component for ArticleDetail {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            id: ctx.props().id,
            article: None,
            loading: true,
            fetch_seq: 0,
            bookmark_ctx: BookmarkCtxSub::subscribe(ctx, Msg::BookmarkContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page_classes = css!(
            "
            max-width: 800px;
            margin: 0 auto;
            padding: 30px 20px;
        "
        );

        if self.loading {
            return html! {
                <div class={page_classes}>
                    <div style="text-align: center; padding: 50px 0; color: #666;">
                        {"Loading article..."}
                    </div>
                </div>
            };
        }

        let article = match &self.article {
            None => {
                return html! {
                    <div class={page_classes}>
                        <div style="text-align: center; padding: 50px 0;">
                            <h2>{"Article not available"}</h2>
                            <p style="color: #666;">
                                {"The article you're looking for could not be found."}
                            </p>
                            <Link<Route> to={Route::Home}>{"← Back to Home"}</Link<Route>>
                        </div>
                    </div>
                }
            }
            Some(article) => article,
        };

        let bookmarked = self.bookmark_ctx.as_ref().is_bookmarked(article.id);

        let onclick = ctx.link().callback(|_| Msg::ToggleBookmark);

        let bookmark_classes = css!(
            "
            border: none;
            background: none;
            cursor: pointer;
            font-size: 120%;
        "
        );

        let bookmark_label = if bookmarked {
            "Remove bookmark"
        } else {
            "Bookmark article"
        };
        let bookmark_glyph = if bookmarked { "★" } else { "☆" };

        let meta_classes = css!(
            "
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 15px;
        "
        );

        let image = match &article.image_url {
            None => html! {},
            Some(image_url) => html! {
                <img
                    src={article_image_src(image_url)}
                    alt={article.title().to_string()}
                    style="width: 100%; max-height: 500px; object-fit: cover; margin-bottom: 25px;"
                />
            },
        };

        html! {
            <div class={page_classes}>
                <Link<Route> to={Route::Home}>{"← Back to all stories"}</Link<Route>>

                <div class={meta_classes}>
                    <div>
                        <span style="font-size: 80%; color: #666; text-transform: uppercase; margin-right: 15px;">
                            {article.category()}
                        </span>
                        <span style="font-size: 80%; color: #666;">{&article.date}</span>
                    </div>
                    <button
                        class={bookmark_classes}
                        {onclick}
                        aria-label={bookmark_label}
                    >{bookmark_glyph}</button>
                </div>

                <h1>{article.title()}</h1>
                {image}

                <article style="line-height: 1.7;">
                    {article.content()}
                </article>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.fetch(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if ctx.props().id != self.id {
            self.id = ctx.props().id;
            self.fetch(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ArticleLoaded { seq, article } => {
                if seq != self.fetch_seq {
                    // a newer navigation superseded this request
                    return false;
                }
                self.article = article;
                self.loading = false;
                true
            }
            Self::Message::BookmarkContextUpdate(bookmark_ctx) => {
                self.bookmark_ctx.set(bookmark_ctx);
                true
            }
            Self::Message::ToggleBookmark => {
                if let Some(article) = &self.article {
                    self.bookmark_ctx.as_ref().toggle::<Self>(article.clone());
                }
                false
            }
        }
    }
}

impl ArticleDetail {
    fn fetch(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        self.article = None;
        self.fetch_seq += 1;

        let seq = self.fetch_seq;
        let id = self.id;

        ctx.link().send_future(async move {
            let article = match fetch_article(id).await {
                Ok(article) => article,
                Err(e) => {
                    console::log!(format!("failed to fetch article {id}: {e}"));
                    None
                }
            };
            Msg::ArticleLoaded { seq, article }
        });
    }
}

async fn fetch_article(id: i64) -> Result<Option<interfacing::Article>, FetchError> {
    let response = Request::get(&format!("/api/articles/{}", id))
        .send()
        .await
        .map_err(FetchError::RequestError)?;

    match response.status() {
        200 => {
            let body = response
                .json::<interfacing::ApiResponse<interfacing::Article>>()
                .await
                .map_err(FetchError::ParseError)?;
            Ok(body.data)
        }
        // surfaced as the explicit "not available" state
        404 => Ok(None),
        status => Err(FetchError::StatusError(status)),
    }
}
