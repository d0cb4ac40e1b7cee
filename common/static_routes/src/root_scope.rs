#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub home: Home,
    pub bookmarks: Bookmarks,
}

#[derive(Default, Get)]
pub struct Home;

impl Url for Home {
    fn postfix(&self) -> &str {
        "/"
    }
}

#[derive(Default, Get)]
pub struct Bookmarks;

impl Url for Bookmarks {
    fn postfix(&self) -> &str {
        "/bookmarks"
    }
}
