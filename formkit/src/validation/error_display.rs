/// Where a front-end should display validation errors for a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Show the error message below the widget (default).
    #[default]
    Below,
    /// Show the error message inline, next to the widget.
    Inline,
    /// Don't display the message - the widget only carries error state.
    None,
}
