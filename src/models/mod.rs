pub mod activity;

pub use activity::{Activity, ActivityList, ActivityRecord};
