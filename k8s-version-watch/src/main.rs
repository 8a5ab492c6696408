use k8s_version_kubeapi::KubeApi;
use k8s_version_provider::VersionProvider;
use k8s_version_provider::version_cache;
use tokio::time::MissedTickBehavior;

use config::Config;

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        ?config,
        supported = k8s_version::SUPPORTED_RANGE,
        "Starting k8s-version-watch"
    );

    let kubeapi = KubeApi::new().await?;
    let cache = version_cache(config.cache_ttl);
    let provider = VersionProvider::new(kubeapi, cache);

    let mut interval = tokio::time::interval(config.poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => poll(&provider).await,
            _ = &mut shutdown => break,
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

async fn poll(provider: &VersionProvider<KubeApi>) {
    match provider.discover().await {
        Ok(discovered) => tracing::trace!(
            version = %discovered.version,
            outcome = ?discovered.outcome,
            "Polled kubernetes version"
        ),
        Err(err) => tracing::error!(?err, "Failed to discover kubernetes version"),
    }
}
