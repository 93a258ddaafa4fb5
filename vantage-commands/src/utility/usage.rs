use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "usage <command>",
};

/// Show usage for a specific command.
///
/// A missing argument returns this command's own usage and an unknown
/// command returns a short not-found message.
pub fn run(arg1: Option<&str>) -> String {
    let Some(raw_name) = arg1 else {
        return format!("Usage: `{}`", META.usage);
    };

    let lookup = raw_name.trim().to_ascii_lowercase();

    match COMMANDS.iter().find(|command| command.name == lookup) {
        Some(command) => format!("Usage: `{}`", command.usage),
        None => format!("Unknown command: `{lookup}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lookup() {
        assert_eq!(run(None), "Usage: `usage <command>`");
        assert_eq!(run(Some("SORT")), "Usage: `sort <table> <field> [asc|desc]`");
        assert_eq!(run(Some("warn")), "Unknown command: `warn`");
    }
}
