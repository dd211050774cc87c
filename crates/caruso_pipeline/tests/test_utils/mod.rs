//! Mock collaborators for pipeline testing.

use async_trait::async_trait;
use caruso_error::{
    CarusoError, CarusoResult, ExtractionError, ExtractionErrorKind, GenerationError,
    GenerationErrorKind, SynthesisError, SynthesisErrorKind,
};
use caruso_interface::{ContentExtractor, ScriptWriter, SpeechSynthesizer};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always succeed with the given payload
    Success(Vec<u8>),
    /// Always fail with the given message
    Error(String),
}

/// Shared mock scaffolding: configured behavior plus a call counter.
struct MockInner {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockInner {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    fn next(&self) -> Result<Vec<u8>, String> {
        *self.call_count.lock().unwrap() += 1;
        match &self.behavior {
            MockBehavior::Success(payload) => Ok(payload.clone()),
            MockBehavior::Error(message) => Err(message.clone()),
        }
    }

    fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

/// Mock content extractor.
pub struct MockExtractor(MockInner);

impl MockExtractor {
    pub fn success(content: impl Into<String>) -> Self {
        Self(MockInner::new(MockBehavior::Success(
            content.into().into_bytes(),
        )))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self(MockInner::new(MockBehavior::Error(message.into())))
    }

    pub fn call_count(&self) -> usize {
        self.0.call_count()
    }
}

#[async_trait]
impl ContentExtractor for MockExtractor {
    async fn extract(&self, _url: &str) -> CarusoResult<String> {
        match self.0.next() {
            Ok(payload) => Ok(String::from_utf8(payload).unwrap()),
            Err(message) => Err(CarusoError::from(ExtractionError::new(
                ExtractionErrorKind::ApiRequest(message),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-extractor"
    }
}

/// Mock script writer.
pub struct MockScriptWriter(MockInner);

impl MockScriptWriter {
    pub fn success(script: impl Into<String>) -> Self {
        Self(MockInner::new(MockBehavior::Success(
            script.into().into_bytes(),
        )))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self(MockInner::new(MockBehavior::Error(message.into())))
    }

    pub fn call_count(&self) -> usize {
        self.0.call_count()
    }
}

#[async_trait]
impl ScriptWriter for MockScriptWriter {
    async fn write_script(&self, _content: &str) -> CarusoResult<String> {
        match self.0.next() {
            Ok(payload) => Ok(String::from_utf8(payload).unwrap()),
            Err(message) => Err(CarusoError::from(GenerationError::new(
                GenerationErrorKind::ApiRequest(message),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-writer"
    }
}

/// Mock speech synthesizer.
pub struct MockSynthesizer(MockInner);

impl MockSynthesizer {
    pub fn success(audio: impl Into<Vec<u8>>) -> Self {
        Self(MockInner::new(MockBehavior::Success(audio.into())))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self(MockInner::new(MockBehavior::Error(message.into())))
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.0.call_count()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, _script: &str) -> CarusoResult<Vec<u8>> {
        match self.0.next() {
            Ok(payload) => Ok(payload),
            Err(message) => Err(CarusoError::from(SynthesisError::new(
                SynthesisErrorKind::ApiRequest(message),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-synthesizer"
    }
}
