/// All possible messages that drive state transitions.
#[derive(Debug)]
pub enum Msg {
    /// One raw input line, quoted commands and all.
    Line(String),
    /// An input line whose bytes are not UTF-8.
    Undecodable(std::str::Utf8Error),
    /// Input is exhausted.
    Quit,
}
