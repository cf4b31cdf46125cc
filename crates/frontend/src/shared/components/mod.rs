pub mod error_card;
pub mod page_header;

pub use error_card::ErrorCard;
pub use page_header::PageHeader;
