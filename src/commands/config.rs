use crate::core::{
    config::Config, dirs::get_config_directory, error::Result, print_field,
    print_section_header, print_success,
};

/// Show the effective configuration, or write it out with `--init`
pub fn execute_config(init: bool) -> Result<()> {
    let config = Config::load()?;

    if init {
        let path = config.save()?;
        print_success(&format!("Wrote {}", path.display()));
        return Ok(());
    }

    print_section_header("Configuration");
    print_field("Directory", get_config_directory().display());
    print_field("Diff viewer", &config.diff_viewer);
    print_field("Cache TTL", format!("{}s", config.cache_ttl_secs));
    print_field("Git program", &config.git_program);
    print_field("Scratch dir", config.scratch_dir().display());
    println!();

    Ok(())
}
