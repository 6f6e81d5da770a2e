pub async fn init_env() {
    // `.env` is optional; deployments set the environment directly.
    let _ = dotenvy::dotenv();
}
