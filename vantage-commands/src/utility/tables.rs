use vantage_core::Context;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "tables",
    desc: "List the catalog tables and their row counts.",
    category: "utility",
    usage: "tables",
};

pub fn run(ctx: &Context) -> String {
    let summary = ctx.store.catalog().summary();
    if summary.is_empty() {
        return "The catalog has no tables.".to_owned();
    }

    let width = summary
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Tables\n");
    for (name, rows) in summary {
        out.push_str(&format!("{name:<width$}  {rows} rows\n"));
    }
    out
}
