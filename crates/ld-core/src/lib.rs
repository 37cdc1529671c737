//! ld-core: run identity types shared across the pipeline.

pub mod locator;
pub mod version;

pub use locator::RunLocator;
pub use version::RecipeVersion;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Invalid recipe tag '{tag}': expected major.minor.patch")]
    InvalidVersion { tag: String },

    #[error("Invalid run URL '{url}': expected .../<owner>/projects/<project>/studies/<job>/runs/<run>")]
    InvalidRunUrl { url: String },
}
