mod context;
mod run;

pub use context::AppContext;
pub use run::{dispatch, is_informational, parse, run};
