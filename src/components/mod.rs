pub mod footer;
pub mod hero;
pub mod nav;
pub mod scene;
pub mod waitlist_form;
