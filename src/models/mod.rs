pub mod duration;
pub mod statement;
pub mod verb;

pub use duration::IsoDuration;
pub use statement::{Activity, Actor, LanguageMap, Statement, StatementResult, VerbDescriptor};
pub use verb::Verb;
