use serde_json::json;

use crate::cli::OutputFormat;
use crate::greeting::GreetingService;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let response = GreetingService::new().response();

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "text": response.text }))?);
        }
        OutputFormat::Text => println!("{}", response.text),
    }
    Ok(())
}
