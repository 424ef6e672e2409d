/// User actions triggered by key presses or terminal events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the home screen
    Start,
    /// Send the active field for analysis
    Submit,
    /// Reset the form after viewing a result
    Next,
    /// Switch between URL and text input
    ToggleMode,
    /// Type a character into the active field
    Input(char),
    /// Insert a line break (text mode only)
    Newline,
    /// Delete the last character of the active field
    Backspace,
    /// Insert pasted text
    Paste(String),
    /// Read the system clipboard and insert its text
    PasteClipboard,
    /// Empty the active field
    ClearField,
    ScrollUp,
    ScrollDown,
    /// Toggle debug overlay
    ToggleDebug,
    /// Quit application
    Quit,
}
