use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    /// A global logger was already installed.
    #[error("failed to install console logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Log, Metadata, Record};
    use std::error::Error as _;

    struct Silent;

    impl Log for Silent {
        fn enabled(&self, _: &Metadata) -> bool {
            false
        }

        fn log(&self, _: &Record) {}

        fn flush(&self) {}
    }

    static SILENT: Silent = Silent;

    #[test]
    fn second_logger_install_becomes_web_error() {
        let _ = log::set_logger(&SILENT);
        let err: WebError = log::set_logger(&SILENT).unwrap_err().into();

        assert!(matches!(err, WebError::Logger(_)));
        assert!(err.to_string().starts_with("failed to install console logger"));
        assert!(err.source().is_some());
    }
}
