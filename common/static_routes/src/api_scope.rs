#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub health_check: HealthCheck,
    pub articles: Articles,
}

#[derive(Default, Get)]
pub struct HealthCheck;

impl Url for HealthCheck {
    fn postfix(&self) -> &str {
        "/health_check"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

// article listing; a single article is fetched at "/articles/:id"
#[derive(Default, Get)]
pub struct Articles;

impl Url for Articles {
    fn postfix(&self) -> &str {
        "/articles"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}
