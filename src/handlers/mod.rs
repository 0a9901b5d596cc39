pub mod helpers;
pub mod names;
pub mod places;
pub mod recommend;
pub mod system;
