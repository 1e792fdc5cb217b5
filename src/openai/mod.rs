mod core;

pub use self::core::{CompletionFailure, CompletionGateway, Message, Role, SamplingParams};
