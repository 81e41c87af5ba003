pub mod arrow_button;
pub mod article_params_form;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;

pub use arrow_button::*;
pub use article_params_form::*;
pub use button::*;
pub use radio_group::*;
pub use select::*;
pub use separator::*;
pub use text::{field_label, heading};
