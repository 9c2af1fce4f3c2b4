pub mod catalog;
pub mod dispatcher;
pub mod guide;
