mod exec_log;
pub use exec_log::{ExecLog, LoggingConnection};

mod fleet;
pub use fleet::Fleet;

pub use ontoquery::stmt::Value;
