// Path Tracking algorithms module

pub mod plan_follower;

pub use plan_follower::*;
