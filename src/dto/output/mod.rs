mod notification_id;
mod notification_info;
mod user_info;

pub use notification_id::*;
pub use notification_info::*;
pub use user_info::*;
