// Language module - language identification from file extensions and
// comment extraction through per-family syntax implementations.

pub mod common;
pub mod factory;
pub mod kinds;
pub mod language_trait;

// Comment-family implementations
pub mod assembly;
pub mod bash;
pub mod batch;
pub mod c_like;
pub mod clojure;
pub mod css;
pub mod elixir;
pub mod fortran;
pub mod haskell;
pub mod html;
pub mod julia;
pub mod lua;
pub mod matlab;
pub mod pascal;
pub mod powershell;
pub mod python;
pub mod ruby;
pub mod sql;
pub mod visual_basic;

pub use factory::comment_syntax;
pub use kinds::{detect_language, detect_m_dialect, Language};
pub use language_trait::CommentSyntax;
