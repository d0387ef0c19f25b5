pub mod attachment;
pub mod auth;
pub mod portfolio;
pub mod record;
pub mod skill;
