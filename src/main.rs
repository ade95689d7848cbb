use cooklang_html::{convert_file, ConvertError, SiteConfig};
use log::debug;
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ConvertError::Usage) => {
            println!("Usage: cooklang-html recipe.cook");
            println!("Output: recipe.html");
            ExitCode::FAILURE
        }
        Err(e) => {
            debug!("{e:?}");
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConvertError> {
    // Get the input path from command-line arguments
    let input = env::args().nth(1).ok_or(ConvertError::Usage)?;
    if !Path::new(&input).exists() {
        return Err(ConvertError::NotFound(input.into()));
    }

    let site = SiteConfig::load()?;
    let summary = convert_file(&input, &site)?;
    println!("{summary}");

    Ok(())
}
