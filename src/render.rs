use crate::cli::{InputArgs, OutputFormat};
use crate::error::{Result, ResultExt};
use crate::session::Session;
use crate::ui;
use flow_report::{CliRenderer, FlowRenderer, HtmlRenderer, JsonRenderer};
use std::fs;

pub fn execute(input: InputArgs, format: OutputFormat, output: Option<String>) -> Result<()> {
    let session = Session::open(&input)?;
    let view = session.app.view(&session.address);
    let rendered = renderer(format).render(&view);

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write report to '{}'", path))?;
            ui::success_message(&format!("Report written to {}", path));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn renderer(format: OutputFormat) -> Box<dyn FlowRenderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
        OutputFormat::Table => Box::new(CliRenderer::new()),
    }
}
