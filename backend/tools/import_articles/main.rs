use backend::conf;
use backend::db;
use clap::Parser;

/// Load a JSON dump of articles into the configured database.
#[derive(clap::Parser, Debug)]
struct Cli {
    /// Path to a file with a JSON array of articles
    #[arg(short, long)]
    file: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    let env = conf::Env::derive();
    let conf = conf::Conf::new(env, conf::EnvConf::derive(env));

    let args = Cli::parse();
    let contents = std::fs::read_to_string(&args.file)?;
    let articles: Vec<interfacing::Article> = serde_json::from_str(&contents)?;

    let db = db::start_db(&conf);

    for article in &articles {
        db::q::put_article(&db, article.clone())?;
    }

    println!("imported {} articles", articles.len());

    Ok(())
}
