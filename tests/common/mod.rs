use sales_insight::{
    SalesAnalyzer,
    aws::MockBedrockRuntime,
    config::{ModelConfig, SourceConfig},
    storage::MemoryObjectStore,
    summary::{PromptLanguage, SummaryClient},
};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const TEST_BUCKET: &str = "test-sales-bucket";
pub const TEST_KEY: &str = "sample-sales.csv";
pub const TEST_MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";

pub const EXAMPLE_CSV: &str = "amount,category,product\n100,A,p1\n50,B,p2\n75,A,p1\n";

/// Analyzer wired to in-memory fakes, with handles kept for assertions
pub struct TestHarness {
    pub store: Arc<MemoryObjectStore>,
    pub bedrock: Arc<MockBedrockRuntime>,
    pub analyzer: SalesAnalyzer,
}

impl TestHarness {
    /// Harness whose bucket holds `csv` under the default key
    pub fn with_csv(csv: &str) -> Self {
        Self::build(
            MemoryObjectStore::new().with_object(TEST_BUCKET, TEST_KEY, csv),
            MockBedrockRuntime::new(),
        )
    }

    /// Harness with an empty bucket
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self::build(MemoryObjectStore::new(), MockBedrockRuntime::new())
    }

    #[allow(dead_code)]
    pub fn with_bedrock(csv: &str, bedrock: MockBedrockRuntime) -> Self {
        Self::build(
            MemoryObjectStore::new().with_object(TEST_BUCKET, TEST_KEY, csv),
            bedrock,
        )
    }

    /// Harness with explicit source and model settings
    #[allow(dead_code)]
    pub fn with_settings(csv: &str, source: SourceConfig, model: ModelConfig) -> Self {
        Self::build_with(
            MemoryObjectStore::new().with_object(TEST_BUCKET, TEST_KEY, csv),
            MockBedrockRuntime::new(),
            source,
            model,
        )
    }

    fn build(store: MemoryObjectStore, bedrock: MockBedrockRuntime) -> Self {
        Self::build_with(store, bedrock, source_config(), model_config())
    }

    fn build_with(
        store: MemoryObjectStore,
        bedrock: MockBedrockRuntime,
        source: SourceConfig,
        model: ModelConfig,
    ) -> Self {
        let store = Arc::new(store);
        let bedrock = Arc::new(bedrock);

        let analyzer = SalesAnalyzer::new(
            store.clone(),
            SummaryClient::new(bedrock.clone(), model),
            source,
        );

        Self {
            store,
            bedrock,
            analyzer,
        }
    }
}

pub fn source_config() -> SourceConfig {
    SourceConfig {
        bucket: TEST_BUCKET.to_string(),
        key: TEST_KEY.to_string(),
    }
}

pub fn model_config() -> ModelConfig {
    ModelConfig {
        model_id: TEST_MODEL.to_string(),
        language: PromptLanguage::En,
        ..ModelConfig::default()
    }
}

/// In-memory log sink for asserting on emitted JSON records
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line parsed as JSON
    pub fn records(&self) -> Vec<serde_json::Value> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
