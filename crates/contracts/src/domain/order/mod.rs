pub mod aggregate;
pub mod catalog;
pub mod completion;
pub mod draft;
pub mod filter;
pub mod payload;
pub mod timeline;
