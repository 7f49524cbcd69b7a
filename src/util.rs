use crate::constant::PANIC_PREFIX;

#[cfg(feature = "tracing_debug")]
use tracing::error;

/// Panic with `message` unless `condition` holds.
///
/// Used for mistakes in the argument declarations, which no command line input can recover from.
#[track_caller]
pub(crate) fn require(condition: bool, message: impl FnOnce() -> String) {
    if !condition {
        fail(message());
    }
}

#[track_caller]
pub(crate) fn fail(message: String) -> ! {
    #[cfg(feature = "tracing_debug")]
    {
        error!("{message}");
    }

    panic!("{PANIC_PREFIX}: {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_holds() {
        require(true, || "unused".to_string());
    }

    #[test]
    #[should_panic(expected = "argbind: the message")]
    fn require_fails() {
        require(false, || "the message".to_string());
    }
}
