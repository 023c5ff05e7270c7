use crate::core::aggregator::PostalAggregator;
use crate::core::lines::data_lines;
use crate::core::report::Report;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct PostalPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> PostalPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PostalPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let input_path = self.config.input_path();

        // 檔案在 read_file 內開啟並在返回前關閉；開檔失敗時不輸出進度訊息
        let bytes = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), input_path);

        println!("Leyendo archivo: {}...", input_path);
        println!();

        Ok(data_lines(&bytes))
    }

    async fn transform(&self, lines: Vec<String>) -> Result<PostalAggregator> {
        let mut aggregate = PostalAggregator::new();
        let mut discarded = 0usize;

        for (index, line) in lines.iter().enumerate() {
            if !aggregate.process_line(line) {
                discarded += 1;
                tracing::debug!(line = index + 1, "Discarding line: {:?}", line);
            }
        }

        if discarded > 0 {
            tracing::info!("Discarded {} of {} data lines", discarded, lines.len());
        }

        println!("Archivo procesado correctamente");
        Ok(aggregate)
    }

    async fn load(&self, aggregate: PostalAggregator) -> Result<Report> {
        let report = Report::from_aggregate(&aggregate);
        print!("{}", report);
        Ok(report)
    }
}
