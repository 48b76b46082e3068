use crate::config::LogConfig;
use crate::error::Result;

/// Routes the `log` facade and panics to the browser console.
pub fn init(config: LogConfig) -> Result<()> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config.level)?;
    Ok(())
}
