pub mod postal_pipeline;
