pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const ASSIGN_DELIMITER: char = '=';
pub(crate) const SEPARATOR_DELIMITER: char = ',';
pub(crate) const PANIC_PREFIX: &str = "argbind";
