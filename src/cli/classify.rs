use crate::classifier;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(description: &str) -> Result<()> {
    let settings = load_settings();
    let result = classifier::classify(&settings, description);
    println!("{}", result.as_cell());
    Ok(())
}
