pub mod bedrock;
pub mod config;
pub mod mock;

use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_s3::Client as S3Client;

pub use bedrock::{BedrockResponse, BedrockRuntime, BedrockRuntimeImpl};
pub use config::AwsConfig;
pub use mock::{MockBedrockRuntime, MockResponseMode};

/// SDK clients built once per process from a shared config
#[derive(Clone)]
pub struct AwsClients {
    pub s3: S3Client,
    pub bedrock: BedrockClient,
}

impl AwsClients {
    pub async fn new(config: &AwsConfig) -> Self {
        let sdk_config = config.build_sdk_config().await;

        Self {
            s3: S3Client::new(&sdk_config),
            bedrock: BedrockClient::new(&sdk_config),
        }
    }
}
