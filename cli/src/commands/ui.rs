use console::Style;

pub fn print_header(title: &str) {
    println!("\n{}", Style::new().bold().cyan().apply_to(title));
    println!("{}", Style::new().dim().apply_to("─".repeat(title.len())));
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("ERROR:"), msg);
}

/// Plain fixed-width table with a styled header row.
pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let header_style = Style::new().bold();
    let line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_style.apply_to(line.join("  ")));
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("─".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)))
    );

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", line.join("  "));
    }
}
