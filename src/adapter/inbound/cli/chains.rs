//! Handler for the `chains` command.

use crate::domain::chain;

/// Render one line per supported chain.
#[must_use]
pub fn render() -> String {
    chain::entries()
        .iter()
        .map(|entry| {
            format!(
                "{:<10} {:<10} {}",
                entry.name, entry.feed_chain_code, entry.channel_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print supported chains to stdout.
pub fn execute() {
    println!("{}", render());
}
