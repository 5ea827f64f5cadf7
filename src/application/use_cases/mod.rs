/// Use cases module containing application business logic orchestration
mod summarize_violations;

pub use summarize_violations::SummarizeViolationsUseCase;
