use crate::core::report::Report;
use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct AnalyzerEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AnalyzerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<Report> {
        tracing::info!("Starting postal code analysis");
        self.monitor.log_stats("Start");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} data lines", lines.len());
        self.monitor.log_stats("Extract");

        // Transform
        let aggregate = self.pipeline.transform(lines).await?;
        tracing::debug!(
            "Aggregated {} settlements under {} postal codes",
            aggregate.total_settlements(),
            aggregate.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let report = self.pipeline.load(aggregate).await?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        tracing::info!(
            "Analysis finished with {} postal codes",
            report.total_postal_codes()
        );
        Ok(report)
    }
}
