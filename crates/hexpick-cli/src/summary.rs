use console::Style;
use hexpick_core::status::Severity;
use hexpick_core::table::{ColorTable, Column, RepairPrompt, REQUIRED_COLUMNS};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    hex: Style,
    missing: Style,
    omitted: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            hex: Style::new().green(),
            missing: Style::new().yellow(),
            omitted: Style::new().dim(),
        }
    }
}

fn underline(title: &str) -> String {
    "\u{2550}".repeat(title.chars().count())
}

pub fn print_table_summary(base: &str, table: &ColorTable) {
    let s = Styles::new();
    let title = format!("Color Table: {base}");

    println!();
    println!("  {}", s.title.apply_to(&title));
    println!("  {}", s.title.apply_to(underline(&title)));
    println!();

    let headers: Vec<&str> = table.columns().iter().map(Column::header).collect();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Columns"),
        s.value.apply_to(headers.join(", "))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rows"),
        s.value.apply_to(table.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Picked"),
        s.hex.apply_to(format!("{} colors", table.picked_count()))
    );
    let omitted = table.rows().iter().filter(|r| r.is_omitted()).count();
    if omitted > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Omitted"),
            s.omitted.apply_to(omitted)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Rows"));
    println!(
        "    {:<10}{:<28}{:<16}{}",
        s.label.apply_to("Number"),
        s.label.apply_to("Name"),
        s.label.apply_to("Group"),
        s.label.apply_to("Hex")
    );
    for (i, row) in table.rows().iter().enumerate() {
        let line = format!(
            "    {:<10}{:<28}{:<16}",
            row.factory_number(),
            table.display_name(i),
            row.color_group()
        );
        if row.is_omitted() {
            println!("{}{}", s.omitted.apply_to(line), s.omitted.apply_to(row.hex_value()));
        } else if row.has_color() {
            println!("{line}{}", s.hex.apply_to(row.hex_value()));
        } else {
            println!("{line}{}", s.label.apply_to("-"));
        }
    }
    println!();
}

/// Describe a file that needs repair before it can be used.
pub fn print_repair_prompt(base: &str, prompt: &RepairPrompt) {
    let s = Styles::new();
    let title = format!("{base}: missing required columns");

    eprintln!();
    eprintln!("  {}", s.title.apply_to(&title));
    eprintln!("  {}", s.title.apply_to(underline(&title)));
    eprintln!();
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Current"),
        s.value.apply_to(prompt.headers.join(", "))
    );
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Required"),
        s.value.apply_to(REQUIRED_COLUMNS.join(", "))
    );
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Missing"),
        s.missing.apply_to(prompt.missing.join(", "))
    );
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Rows"),
        s.value.apply_to(prompt.records.len())
    );
    eprintln!();
}

/// One status line as the desktop front end would show it.
pub fn print_status(message: &str, severity: Severity) {
    let style = match severity {
        Severity::Neutral => Style::new(),
        Severity::Info => Style::new().cyan(),
        Severity::Success => Style::new().green(),
        Severity::Warning => Style::new().yellow(),
        Severity::Error => Style::new().red().bold(),
    };
    eprintln!("  {} {}", style.apply_to(format!("[{severity}]")), message);
}
