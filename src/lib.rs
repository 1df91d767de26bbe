//! emojigen: turn a text prompt into an AI-generated emoji.
//!
//! ```no_run
//! use emojigen::{EmojiService, EmojiStyle, GenerationConfig, GenerationRequest};
//!
//! # async fn run() -> emojigen::Result<()> {
//! let service = EmojiService::new(GenerationConfig::from_env())?;
//! service.set_caller_identity("user-42");
//!
//! let result = service
//!     .generate_emoji(GenerationRequest::new("a cute cat", EmojiStyle::Cartoon, "animal"))
//!     .await;
//! if let Some(url) = result.image_url() {
//!     println!("{}", url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod logger;
pub mod models;

pub use config::{GenerationConfig, ValidatorConfig};
pub use error::{EmojiError, FailureKind, Result};
pub use generation::{
    enhancer, BatchCoordinator, EmojiGenerator, EmojiService, GenerationClient, PromptValidator,
};
pub use models::{
    CallerIdentity, EmojiSize, EmojiStyle, GenerationRequest, GenerationResult, InlineImage,
    RejectReason, ValidationOutcome,
};
