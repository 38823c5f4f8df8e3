pub mod column;
pub mod data_model;
pub mod edit;
pub mod i18n;
pub mod plan;
pub mod schedule;
pub mod view;
