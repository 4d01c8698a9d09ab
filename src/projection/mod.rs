//! IUL cash value illustration

mod engine;
mod illustration;
mod irr;
mod state;

pub use engine::{project_iul, IulIllustrator, IulInput};
pub use illustration::{IllustrationResult, IllustrationRow, IllustrationSummary};
pub use irr::calculate_irr;
pub use state::IllustrationState;
