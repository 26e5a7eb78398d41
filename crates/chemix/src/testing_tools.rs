use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};

/// Renders a diagnostic the way a front end would show it to a user, minus the colours
pub(crate) fn render_report(diagnostic: impl Diagnostic) -> String {
    let mut out = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .with_width(200)
        .render_report(&mut out, &diagnostic)
        .unwrap();
    out
}
