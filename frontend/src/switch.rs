use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Home => html! { <Home/> },
        Route::ArticleDetail { id } => html! { <ArticleDetail {id}/> },
        Route::Bookmarks => html! { <BookmarkList/> },
        Route::NotFound => html! { <h1>{"not found 404"}</h1> },
    }
}
