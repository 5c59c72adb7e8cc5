//! Confluence API types.

mod attachment;
mod page;
mod space;

pub use attachment::Attachment;
pub(crate) use attachment::AttachmentsResponse;
pub use page::Page;
pub(crate) use page::PagesResponse;
pub use space::Space;
pub(crate) use space::SpacesResponse;
