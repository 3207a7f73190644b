mod common;

mod compliance;
mod performance;
mod routing;
