mod utils;

use imports::*;

mod imports {
    pub use super::utils::{Error, *};
    pub use cozo::*;
    pub use itertools::Itertools;
    pub use std::collections::BTreeMap;
}

#[tracing::instrument(name = "Create articles table", skip_all)]
pub fn create_articles_table(db: &DbInstance) -> OpResult {
    let script = include_str!("articles/create_articles_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Ensure articles table", skip_all)]
pub fn ensure_articles_table(db: &DbInstance) -> OpResult {
    let script = include_str!("articles/ensure_articles_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Immutable);
    result.map_err(Error::EngineError).map(|_| ())
}

#[tracing::instrument(name = "Put article", skip_all)]
pub fn put_article(db: &DbInstance, article: interfacing::Article) -> OpResult {
    let script = include_str!("articles/put.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => article.id.into(),
        "title_en".into() => article.title_en.into(),
        "title_ar".into() => article.title_ar.into(),
        "content_en".into() => article.content_en.into(),
        "content_ar".into() => article.content_ar.into(),
        "date".into() => article.date.into(),
        "category".into() => opt_str_value(&article.category),
        "image_url".into() => opt_str_value(&article.image_url),
        "source_url".into() => article.source_url.into(),
        "status".into() => article.status.into(),
        "created_at".into() => article.created_at.into(),
    };

    let result = db.run_script(script, params, ScriptMutability::Mutable);
    op_result(result)
}

// English-facing projection, newest (highest id) first
#[tracing::instrument(name = "Find articles", skip_all)]
pub fn find_articles(db: &DbInstance) -> Result<Vec<interfacing::Article>> {
    let script = include_str!("articles/find.cozo");
    let result = db
        .run_script(script, Default::default(), ScriptMutability::Immutable)
        .map_err(Error::EngineError)?;

    rows_to_articles(result)
}

#[tracing::instrument(name = "Find article by id", skip(db))]
pub fn find_article_by_id(db: &DbInstance, id: i64) -> Result<Option<interfacing::Article>> {
    let script = include_str!("articles/find_by_id.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => id.into()
    };
    let result = db
        .run_script(script, params, ScriptMutability::Immutable)
        .map_err(Error::EngineError)?;

    Ok(rows_to_articles(result)?.into_iter().next())
}

fn rows_to_articles(result: NamedRows) -> Result<Vec<interfacing::Article>> {
    let headers = result.headers.iter().map(String::as_str).collect_vec();
    let rows = result.rows.iter().map(Vec::as_slice).collect_vec();

    match &headers[..] {
        ["id", "title_en", "content_en", "date", "category", "image_url", "source_url", "status", "created_at"] => {
        }
        _ => return Err(Error::ResultError(result)),
    }

    let mut res = vec![];
    // all rows must comply to format, if any does not - return error
    for row in rows {
        match &row[..] {
            [DataValue::Num(Num::Int(id)), DataValue::Str(title_en), DataValue::Str(content_en), DataValue::Str(date), category @ (DataValue::Str(_) | DataValue::Null), image_url @ (DataValue::Str(_) | DataValue::Null), DataValue::Str(source_url), DataValue::Str(status), DataValue::Str(created_at)] =>
            {
                res.push(interfacing::Article {
                    id: *id,
                    title_en: title_en.to_string(),
                    title_ar: String::new(),
                    content_en: content_en.to_string(),
                    content_ar: String::new(),
                    date: date.to_string(),
                    category: opt_string(category),
                    image_url: opt_string(image_url),
                    source_url: source_url.to_string(),
                    status: status.to_string(),
                    created_at: created_at.to_string(),
                });
            }
            _ => return Err(Error::ResultError(result)),
        }
    }

    Ok(res)
}
