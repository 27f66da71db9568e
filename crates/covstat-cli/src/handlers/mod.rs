mod context;

pub mod list;
pub mod live;
pub mod summary;
pub mod timeline;

pub use context::HandlerContext;
