pub mod filter_select;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod search_input;
pub mod timestamp;
pub mod toast;

pub use filter_select::FilterSelect;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorAlert, ErrorPage, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::RequiresLoggedIn;
pub use search_input::SearchInput;
pub use timestamp::Timestamp;
pub use toast::ToastContainer;
