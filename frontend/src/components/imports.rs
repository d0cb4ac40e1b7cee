pub use crate::router::Route;
pub use static_routes::*;

pub use std::rc::Rc;

pub use gloo_console as console;
pub use gloo_net::http::{Request, Response};
pub use serde::{Deserialize, Serialize};
pub use stylist::yew::{styled_component, Global};
pub use web_sys::HtmlInputElement;

pub use stylist::{css, style, Style};
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub trait RequestExtend {
    fn static_get(static_path: impl Get) -> Self;
}

impl RequestExtend for Request {
    fn static_get(static_path: impl Get) -> Self {
        Request::get(static_path.get().complete())
    }
}

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Request error")]
    RequestError(#[source] gloo_net::Error),

    #[error("Parse error")]
    ParseError(#[source] gloo_net::Error),

    #[error("Unexpected status: {0}")]
    StatusError(u16),
}

pub fn article_image_src(image_url: &str) -> String {
    format!("/static/articles_images/{}", image_url)
}
