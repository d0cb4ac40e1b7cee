use backend::conf;
use backend::startup::Application;
use backend::trace::TracingSubscriber;

#[tokio::main]
async fn main() -> hyper::Result<()> {
    let env = conf::Env::derive();
    let env_conf = conf::EnvConf::derive(env);
    let conf = conf::Conf::new(env, env_conf);

    TracingSubscriber::new()
        .pretty(conf.log.pretty)
        .set_global_default();

    tracing::info!("APP_ENV={}", env.as_ref());

    let application = Application::build(&conf).await;

    application.server().await
}
