pub mod matching;
pub mod order;
pub mod state;

pub use matching::MatchMode;
pub use order::QuestionOrder;
pub use state::{AnswerOutcome, FinalScore, Phase, Progress, SessionState, SessionStats};
