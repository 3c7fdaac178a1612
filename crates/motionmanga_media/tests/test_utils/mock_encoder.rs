//! Mock encoder for testing.

use async_trait::async_trait;
use motionmanga_error::{TranscodeError, TranscodeErrorKind};
use motionmanga_media::Encoder;
use std::ffi::OsString;
use std::sync::{Arc, Mutex};

/// Behavior configuration for the mock encoder.
#[derive(Debug, Clone, Copy)]
pub enum EncoderBehavior {
    /// Copy the input file to the output path
    CopyInput,
    /// Exit unsuccessfully without writing anything
    Fail,
}

/// Encoder that records its invocations.
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct MockEncoder {
    behavior: EncoderBehavior,
    calls: Arc<Mutex<Vec<Vec<OsString>>>>,
}

impl MockEncoder {
    /// Create a mock encoder that copies input to output.
    pub fn new_success() -> Self {
        Self::new_with_behavior(EncoderBehavior::CopyInput)
    }

    /// Create a mock encoder that always fails.
    pub fn new_failing() -> Self {
        Self::new_with_behavior(EncoderBehavior::Fail)
    }

    /// Create a mock encoder with custom behavior.
    pub fn new_with_behavior(behavior: EncoderBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times encode() was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Arguments of every call so far.
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<Vec<OsString>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Encoder for MockEncoder {
    async fn encode(&self, args: &[OsString]) -> Result<(), TranscodeError> {
        self.calls.lock().unwrap().push(args.to_vec());

        match self.behavior {
            EncoderBehavior::CopyInput => {
                let input = args
                    .iter()
                    .position(|a| a == "-i")
                    .and_then(|i| args.get(i + 1))
                    .expect("mock encoder needs -i");
                let output = args.last().expect("mock encoder needs an output");
                std::fs::copy(input, output).map_err(|e| {
                    TranscodeError::new(TranscodeErrorKind::Failed {
                        status: "exit status: 1".to_string(),
                        stderr: e.to_string(),
                    })
                })?;
                Ok(())
            }
            EncoderBehavior::Fail => Err(TranscodeError::new(TranscodeErrorKind::Failed {
                status: "exit status: 1".to_string(),
                stderr: "moov atom not found".to_string(),
            })),
        }
    }
}
