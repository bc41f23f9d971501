pub mod answer;
pub mod insight;
pub mod language;
pub mod metrics;
pub mod question;
pub mod session;
