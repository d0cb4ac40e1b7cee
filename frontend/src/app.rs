use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::bookmarks::WithBookmarks;
    use crate::components::Header;

    html! {
        <WithBookmarks>
            <BrowserRouter>
                <Header/>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </WithBookmarks>
    }
}
