use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Manual, // one value per trigger press
    Tab,    // everything at once, tabbing between fields
}

impl Mode {
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Manual => "Manual mode (paste one cell per trigger press)",
            Mode::Tab => "Tab mode (paste every cell, pressing Tab between fields)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Manual => write!(f, "MANUAL"),
            Mode::Tab => write!(f, "TAB"),
        }
    }
}
