pub mod not_found;
pub mod section_page;

pub use not_found::NotFoundPage;
pub use section_page::SectionPage;
