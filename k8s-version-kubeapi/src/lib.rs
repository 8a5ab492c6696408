use std::fmt::Debug;

use k8s_version_ext as k8s;

use k8s::version;

pub struct KubeApi {
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The client is inferred from the environment: the in-cluster service account
    /// when running in a pod, the local kubeconfig otherwise.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = k8s_version_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = kube::Client::try_default().await?;
    /// let api = k8s_version_kubeapi::KubeApi::with_client(client);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(client: kube::Client) -> Self {
        Self { client }
    }

    /// Fetches the API server's build information from `/version`.
    pub async fn info(&self) -> kube::Result<version::Info> {
        self.client
            .apiserver_version()
            .await
            .inspect(|info| tracing::trace!(?info, "Fetched apiserver version"))
    }

    /// Returns the API server's git version, e.g. `v1.30.2-aliyun.1`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &k8s_version_kubeapi::KubeApi) -> kube::Result<()> {
    /// let version = api.git_version().await?;
    /// println!("{version}");
    /// # Ok(()) }
    /// ```
    pub async fn git_version(&self) -> kube::Result<String> {
        self.info().await.map(|info| info.git_version)
    }
}

impl k8s::ServerVersion for KubeApi {
    type Error = kube::Error;

    async fn server_version(&self) -> kube::Result<String> {
        self.git_version().await
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging with the `client` redacted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("client", &"<kube::Client>")
            .finish()
    }
}

#[cfg(test)]
mod tests;
