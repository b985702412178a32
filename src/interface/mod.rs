pub mod prompts;
pub mod render;

pub use prompts::{prompt_day_record, prompt_plan_request, prompt_profile, prompt_yes_no};
pub use render::{display_day_plan, display_score, display_targets};
