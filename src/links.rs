use crate::cli::InputArgs;
use crate::error::Result;
use crate::session::Session;
use crate::ui;

pub fn execute(input: InputArgs) -> Result<()> {
    let session = Session::open(&input)?;
    let view = session.app.view(&session.address);
    let sidebar = &view.sidebar;

    ui::section_header(&sidebar.header.title);
    if !sidebar.header.date.is_empty() {
        ui::info_message(&sidebar.header.date);
    }

    ui::link_line(
        sidebar.summary.is_current,
        &sidebar.summary.label,
        &sidebar.summary.target_address,
    );
    for entry in &sidebar.steps {
        ui::link_line(entry.is_current, &entry.label, &entry.target_address);
    }

    Ok(())
}
