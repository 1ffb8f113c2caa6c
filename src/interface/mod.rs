pub mod prompts;
pub mod render;

pub use prompts::{prompt_goal, prompt_grocery_list, prompt_yes_no, suggest_similar};
pub use render::{
    display_alerts, display_analysis, display_optimized, display_price, display_suggestions,
};
