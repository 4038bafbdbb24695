//! Static content: where a request path lives on disk, reading it, and
//! deciding what to send back.

pub mod composer;
pub mod loader;
pub mod resolver;

pub use composer::Composer;
pub use loader::FileContent;
pub use resolver::{ResolveError, ServerRoot};
