use crate::components::bookmarks::imports::*;
use crate::components::imports::*;
use crate::components::ArticleCard;

pub struct BookmarkList {
    bookmark_ctx: BookmarkCtxSub,
}

pub enum Msg {
    BookmarkContextUpdate(BookmarkCtx),
}

impl Component for BookmarkList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            bookmark_ctx: BookmarkCtxSub::subscribe(ctx, Msg::BookmarkContextUpdate),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let bookmarks = &self.bookmark_ctx.as_ref().state;

        let page_classes = css!(
            "
            max-width: 1100px;
            margin: 0 auto;
            padding: 30px 20px;
        "
        );

        let title_classes = css!("margin-bottom: 5px;");

        let counter = format!(
            "{} {} saved",
            bookmarks.len(),
            if bookmarks.len() == 1 {
                "article"
            } else {
                "articles"
            }
        );

        let body = if bookmarks.is_empty() {
            let empty_classes = css!(
                "
                text-align: center;
                padding: 50px 0;
                color: #555;
            "
            );

            html! {
                <div class={empty_classes}>
                    <h3>{"No saved articles yet"}</h3>
                    <p>{"When you bookmark articles, they'll appear here."}</p>
                    <Link<Route> to={Route::Home}>{"Browse Articles"}</Link<Route>>
                </div>
            }
        } else {
            let grid_classes = css!(
                "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                gap: 20px;
            "
            );

            let cards = bookmarks
                .iter()
                .map(|article| {
                    html! {
                        <ArticleCard key={article.id} article={article.clone()}/>
                    }
                })
                .collect::<Html>();

            html! { <div class={grid_classes}>{cards}</div> }
        };

        html! {
            <div class={page_classes}>
                <h1 class={title_classes}>{"Saved Articles"}</h1>
                <p>{counter}</p>
                {body}
            </div>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::BookmarkContextUpdate(bookmark_ctx) => {
                self.bookmark_ctx.set(bookmark_ctx);
                true
            }
        }
    }
}
