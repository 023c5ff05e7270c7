use crate::core::aggregator::PostalAggregator;
use crate::core::report::Report;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn base_dir(&self) -> &str;
    fn monitoring_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Reads the input and returns its data lines, header already removed.
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<PostalAggregator>;
    async fn load(&self, aggregate: PostalAggregator) -> Result<Report>;
}
