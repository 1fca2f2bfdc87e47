//! Registry access: document parsing, author attribution, fetching.

pub mod author;
pub mod fetch;
pub mod parse;
