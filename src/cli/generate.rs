//! Password generation command

use crate::config::settings::Settings;
use crate::error::VaultResult;
use crate::generator::generate_password;

/// Print a freshly generated password
pub fn handle_generate_command(settings: &Settings, length: Option<usize>) -> VaultResult<()> {
    let password = generate_password(length.unwrap_or(settings.generator.length))?;
    println!("{}", password);
    Ok(())
}
