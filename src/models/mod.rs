pub mod app_state;
pub mod lang;
pub mod projected_site;
pub mod region;
pub mod site;

pub use app_state::AppState;
pub use lang::{Lang, UnsupportedLang};
pub use projected_site::ProjectedSite;
pub use region::Region;
pub use site::{Site, SiteId};
