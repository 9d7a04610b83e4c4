#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// One line typed at a menu prompt.
    Input(String),
    /// Standard input was closed.
    EndOfInput,
}
