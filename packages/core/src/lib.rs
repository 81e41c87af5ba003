pub mod article_state;
pub mod error;
pub mod options;

pub use article_state::{ArticleState, ParamField};
pub use error::{ParamsError, ParamsResult};
pub use options::{
    ContentWidth, FontFamily, FontSize, ParamOption, Swatch, BACKGROUND_COLORS, FONT_COLORS,
};
