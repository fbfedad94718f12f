//! Text Generator Port
//!
//! Single-shot text completion. Implementation is in the infrastructure
//! layer.

use crate::error::AssistantResult;

/// Text generator trait
#[trait_variant::make(TextGenerator: Send)]
pub trait LocalTextGenerator {
    /// Fail fast when the generator cannot be called at all (no API key)
    fn ensure_configured(&self) -> AssistantResult<()>;

    /// Complete `prompt`
    ///
    /// An empty string means the endpoint answered without any text.
    async fn generate(&self, prompt: &str) -> AssistantResult<String>;
}
