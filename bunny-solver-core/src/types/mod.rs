//! 类型定义

mod challenge;
mod config;

pub use challenge::{
    ChallengeAction, ChallengePayload, ChallengeRequest, ChallengeResponse, ChallengeStatus,
    CHALLENGE_API_VERSION, CHALLENGE_KIND,
};
pub use config::ProviderConfig;
