pub mod repositories;
pub mod spoonacular_client;

pub use repositories::saved_recipe_repository::PostgresSavedRecipeRepository;
pub use spoonacular_client::SpoonacularClient;

pub mod mappers;
