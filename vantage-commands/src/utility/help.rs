use vantage_utils::{
    pagination::{page_bounds, page_numbers, total_pages},
    render::{page_footer, pager_line},
};

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "help [page|category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 6;

/// Render the command catalog, optionally filtered by category or page.
pub fn run(arg1: Option<&str>) -> String {
    let parsed_page = arg1.and_then(|raw| raw.parse::<usize>().ok().filter(|page| *page >= 1));
    let category = match (arg1, parsed_page) {
        (Some(raw), None) => Some(raw),
        _ => None,
    };

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category
        && !categories.contains(&wanted_category)
    {
        return format!(
            "Unknown category: `{wanted_category}`. Available categories: {}.",
            categories.join(", ")
        );
    }

    let commands = sorted_commands(category);
    if commands.is_empty() {
        return "No commands available.".to_owned();
    }

    let requested_page = parsed_page.unwrap_or(1);
    let total = total_pages(commands.len(), HELP_COMMANDS_PER_PAGE);

    if requested_page > total {
        return format!("Page {requested_page} does not exist. Available pages: 1-{total}.");
    }

    let (start, end) = page_bounds(commands.len(), HELP_COMMANDS_PER_PAGE, requested_page);
    let mut out = format!("Available Commands\n{}", grouped_help(&commands[start..end]));

    if total > 1 {
        let pages = page_numbers(requested_page, total, total);
        out.push_str(&pager_line(&pages, requested_page, total));
        out.push('\n');
    }
    out.push_str(&page_footer(requested_page, total, None));
    out.trim_end().to_owned()
}

fn grouped_help(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current = None;

    for command in commands {
        if current != Some(command.category) {
            out.push_str(&format!("[{}]\n", command.category));
            current = Some(command.category);
        }
        out.push_str(&format!("  {}: {}\n", command.usage, command.desc));
    }

    out
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}
