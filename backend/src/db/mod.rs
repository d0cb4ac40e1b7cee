use cozo::*;
pub mod q;

use crate::conf::Conf;

pub fn start_db(conf: &Conf) -> DbInstance {
    let db = conf.db.db_instance();

    if q::ensure_articles_table(&db).is_err() {
        let result = q::create_articles_table(&db);
        assert!(result.is_ok());
    }

    db
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // most likely query syntax error
    #[error("Engine error")]
    EngineError(miette::ErrReport),
    // returned results don't cover expected cases
    #[error("Result error")]
    ResultError(NamedRows),
}

pub type Result<T> = std::result::Result<T, Error>;

pub type OpResult = Result<()>;
