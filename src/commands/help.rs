/// Section a command is listed under in the general help
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Files,
    System,
    Shell,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Files, Category::System, Category::Shell];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Files => "Archivos y Directorios",
            Category::System => "Sistema",
            Category::Shell => "Shell",
        }
    }
}

/// Detailed help for one command
#[derive(Debug)]
pub struct CommandHelp {
    pub category: Category,
    /// Argument synopsis, command name included
    pub usage: &'static str,
    /// One line for the general listing
    pub summary: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub notes: &'static [&'static str],
}
