pub mod coordinate;
pub mod decision;
pub mod event;
pub mod event_type;
pub mod policy;
pub mod proximity;
pub mod site;
pub mod week_summary;
