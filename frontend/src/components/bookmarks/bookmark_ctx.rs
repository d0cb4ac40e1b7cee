// Same root ctx component owns the data; subscribers read it and send
// mutations back upstream through the toggle callback.

pub mod imports {
    pub use super::{BookmarkCtx, BookmarkCtxSub, WithBookmarks};
}

use super::store::Bookmarks;
use crate::components::imports::*;
use interfacing::Article;

#[derive(derivative::Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct _Bookmarks {
    pub state: Bookmarks,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    upstream_cb: Callback<Bookmarks>,
}

impl _Bookmarks {
    /// Toggles the bookmark entry for the article, persists the whole
    /// collection, then upstreams the new state to the provider.
    pub fn toggle<COMP: Component>(&self, article: Article) {
        let mut state = self.state.clone();
        state.toggle(article);
        state.remember();
        self.log_from::<COMP>();
        self.upstream_cb.emit(state);
    }

    pub fn is_bookmarked(&self, id: i64) -> bool {
        self.state.is_bookmarked(id)
    }

    fn log_from<COMP: Component>(&self) {
        console::log!(format!(
            "{} toggled a bookmark ({} saved)",
            std::any::type_name::<COMP>(),
            self.state.len(),
        ));
    }
}

pub type BookmarkCtx = Rc<_Bookmarks>;

pub struct BookmarkCtxSub {
    ctx: BookmarkCtx,
    // keep handle for component rerender after the state changes
    _ctx_handle: ContextHandle<BookmarkCtx>,
}

impl AsRef<_Bookmarks> for BookmarkCtxSub {
    fn as_ref(&self) -> &_Bookmarks {
        &self.ctx
    }
}

impl BookmarkCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(BookmarkCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("_Bookmarks context to exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: BookmarkCtx) {
        self.ctx = ctx;
    }
}

pub struct WithBookmarks {
    state: _Bookmarks,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    BookmarksChanged(Bookmarks),
}

impl Component for WithBookmarks {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let upstream_cb = ctx.link().callback(Msg::BookmarksChanged);

        // rehydrated once at app start
        Self {
            state: _Bookmarks {
                state: Bookmarks::derived(),
                upstream_cb,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = Rc::new(self.state.clone());

        html! {
            <ContextProvider<BookmarkCtx> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<BookmarkCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::BookmarksChanged(state) => {
                self.state.state = state;
                true
            }
        }
    }
}
