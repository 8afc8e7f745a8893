pub mod catalog;
pub mod filter;
pub mod nutrition;
pub mod recommendations;
pub mod recommender;
pub mod text;

pub use catalog::RecipeCatalog;
pub use recommender::ScoredRecipe;
