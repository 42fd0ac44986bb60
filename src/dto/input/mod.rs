mod notification_form;
mod pagination;

pub use notification_form::*;
pub use pagination::*;
