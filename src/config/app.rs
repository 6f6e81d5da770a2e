use tokio::sync::OnceCell;

static APP: OnceCell<AppConfig> = OnceCell::const_new();

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
}

impl AppConfig {
    fn new() -> Self {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| {
                tracing::warn!("cannot read `PORT` defaulting to `3000`");

                "3000".into()
            })
            .parse()
            .unwrap_or_else(|err| {
                tracing::error!("cannot parse `PORT`. defaulting to 3000 {:?}", err);
                3000
            });

        AppConfig { port }
    }

    pub async fn get() -> AppConfig {
        APP.get_or_init(async || AppConfig::new()).await.clone()
    }

    pub async fn port() -> u16 {
        Self::get().await.port
    }
}
