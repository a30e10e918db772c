pub mod rewrite;
pub use rewrite::IdentifierRewriter;

pub mod serializer;
pub use serializer::{Inline, Params, Serializer};

pub mod stmt;
pub use stmt::Select;
