use super::feed;
use crate::components::bookmarks::imports::*;
use crate::components::imports::*;

pub struct ArticleCard {
    bookmark_ctx: BookmarkCtxSub,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub article: interfacing::Article,
}

pub enum Msg {
    BookmarkContextUpdate(BookmarkCtx),
    ToggleBookmark,
}

impl Component for ArticleCard {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            bookmark_ctx: BookmarkCtxSub::subscribe(ctx, Msg::BookmarkContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let article = &ctx.props().article;
        let bookmarked = self.bookmark_ctx.as_ref().is_bookmarked(article.id);

        let card_classes = css!(
            "
            border: 1px solid #e2e2e2;
            background-color: white;

            :hover {
                box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
            }
        "
        );

        let image_wrapper_classes = css!("position: relative;");

        let image = match &article.image_url {
            None => html! {},
            Some(image_url) => html! {
                <div class={image_wrapper_classes}>
                    <img
                        src={article_image_src(image_url)}
                        alt={article.title().to_string()}
                        style="width: 100%; height: 190px; object-fit: cover;"
                    />
                </div>
            },
        };

        let onclick = ctx.link().callback(|_| Msg::ToggleBookmark);

        let bookmark_classes = css!(
            "
            border: none;
            background: none;
            cursor: pointer;
            font-size: 110%;
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
            font-size: 80%;
            color: #666;
            text-transform: uppercase;
            margin-bottom: 8px;
        "
        );

        let body_classes = css!("padding: 15px;");

        html! {
            <div class={card_classes}>
                {image}
                <div class={body_classes}>
                    <div class={meta_classes}>
                        <span>{article.category()}</span>
                        <span>{&article.date}</span>
                    </div>
                    <h3>
                        <Link<Route> to={Route::ArticleDetail { id: article.id }}>
                            {article.title()}
                        </Link<Route>>
                        <button
                            class={bookmark_classes}
                            {onclick}
                            aria-label={bookmark_label}
                        >{bookmark_glyph}</button>
                    </h3>
                    <p>{feed::excerpt(article.content(), 100)}</p>
                    <Link<Route> to={Route::ArticleDetail { id: article.id }}>
                        {"Read story →"}
                    </Link<Route>>
                </div>
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::BookmarkContextUpdate(bookmark_ctx) => {
                self.bookmark_ctx.set(bookmark_ctx);
                true
            }
            Self::Message::ToggleBookmark => {
                self.bookmark_ctx
                    .as_ref()
                    .toggle::<Self>(ctx.props().article.clone());
                false
            }
        }
    }
}
