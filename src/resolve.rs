use crate::cli::InputArgs;
use crate::error::{Result, ResultExt};
use crate::session::Session;
use flow_report::Content;

pub fn execute(input: InputArgs) -> Result<()> {
    let session = Session::open(&input)?;
    let view = session
        .app
        .try_view(&session.address)
        .with_context(|| format!("Cannot resolve '{}'", session.address))?;

    println!("{}", describe(&view.content));
    Ok(())
}

/// One line: "summary", or the step's index, label and url separated by tabs
fn describe(content: &Content) -> String {
    match content {
        Content::Summary => "summary".to_string(),
        Content::Report(report) => format!("{}\t{}\t{}", report.index, report.label, report.url),
    }
}
