//! Terminal front end: the About Us page and the organization chart component.

pub mod org_tree;
pub mod page;
pub mod theme;

pub use org_tree::{OrgControl, OrgTree, PhotoBadge};
pub use page::{AboutUsPage, PageExit};
pub use theme::UiTheme;
