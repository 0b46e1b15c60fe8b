//! Terminal styling utilities

use console::{style, Emoji};

use crate::pipeline::DataPaths;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CRIME: Emoji<'_, '_> = Emoji("🚨 ", "");
pub static PEOPLE: Emoji<'_, '_> = Emoji("👥 ", "");
pub static MONEY: Emoji<'_, '_> = Emoji("💵 ", "");
pub static MAP: Emoji<'_, '_> = Emoji("🗺️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     ___ _ __(_)_ __ ___   ___  ___  ___ ___  _ __   ___
    / __| '__| | '_ ` _ \ / _ \/ __|/ __/ _ \| '_ \ / _ \
   | (__| |  | | | | | | |  __/\__ \ (_| (_) | |_) |  __/
    \___|_|  |_|_| |_| |_|\___||___/\___\___/| .__/ \___|
                                             |_|
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Chicago crime, 2019 to 2023, one scene at a time").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the input file card
pub fn print_inputs(paths: &DataPaths) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("📂 Inputs").cyan().bold(),
        " ".repeat(box_width - 12)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {}Crimes:     {:<37}│",
        CRIME,
        truncate_string(&paths.crimes.display().to_string(), 36)
    );
    println!(
        "    │  {}Population: {:<37}│",
        PEOPLE,
        truncate_string(&paths.population.display().to_string(), 36)
    );
    println!(
        "    │  {}Income:     {:<37}│",
        MONEY,
        truncate_string(&paths.income.display().to_string(), 36)
    );
    println!(
        "    │  {}Boundaries: {:<37}│",
        MAP,
        truncate_string(&paths.geo.display().to_string(), 36)
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a scene header for story mode
pub fn print_scene_header(position: usize, total: usize, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("SCENE {}/{}", position, total)).magenta().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Done!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
