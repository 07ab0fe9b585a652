mod battle;
mod narration;
mod request;
mod tests;

pub use battle::SideId;
pub use narration::Narration;
pub use request::{ActionRequest, MenuOption, RequestKind};
