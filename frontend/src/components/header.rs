use crate::components::bookmarks::imports::*;
use crate::components::imports::*;

pub struct Header {
    bookmark_ctx: BookmarkCtxSub,
}

pub enum Msg {
    BookmarkContextUpdate(BookmarkCtx),
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            bookmark_ctx: BookmarkCtxSub::subscribe(ctx, Msg::BookmarkContextUpdate),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let saved = self.bookmark_ctx.as_ref().state.len();

        let today = js_sys::Date::new_0()
            .to_date_string()
            .as_string()
            .unwrap_or_default();

        let global_style = css!(
            "
            body {
                margin: 0;
                font-family: Georgia, 'Times New Roman', serif;
                color: #121212;
                background-color: white;
            }

            a {
                text-decoration: none;
                color: inherit;
            }
        "
        );

        let header_classes = css!(
            "
            border-bottom: 1px solid black;
        "
        );

        let masthead_classes = css!(
            "
            max-width: 1100px;
            margin: 0 auto;
            padding: 20px;
            text-align: center;
        "
        );

        let nav_classes = css!(
            "
            max-width: 1100px;
            margin: 0 auto;
            padding: 10px 20px;
            border-top: 1px solid #e2e2e2;
            display: flex;
            justify-content: space-between;
            font-size: 90%;
        "
        );

        let bookmarks_label = if saved == 0 {
            "Bookmarks".to_string()
        } else {
            format!("Bookmarks ({})", saved)
        };

        html! {
            <>
                <Global css={global_style}/>

                <header class={header_classes}>
                    <div class={masthead_classes}>
                        <Link<Route> to={Route::Home}>
                            <h1 style="margin: 0;">{"Tangier Times"}</h1>
                        </Link<Route>>
                        <p style="margin: 0; font-size: 80%; font-style: italic; color: #666;">
                            {"Morocco's Premier English Daily"}
                        </p>
                    </div>
                    <nav class={nav_classes}>
                        <div>
                            <span style="margin-right: 20px;">
                                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                            </span>
                            <span>
                                <Link<Route> to={Route::Bookmarks}>{bookmarks_label}</Link<Route>>
                            </span>
                        </div>
                        <span style="color: #666;">{today}</span>
                    </nav>
                </header>
            </>
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
