use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{self, PageItem};
use crate::errors::AppResult;
use crate::store::EntityStore;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        page,
        pending,
        monthly,
    } = cmd
    {
        let store = EntityStore::open(&cfg.data_dir)?;

        if *monthly {
            print_monthly(cfg);
            return Ok(());
        }

        let summary = report::summarize(&store.records);
        header("Attendance report");
        println!(
            "Total: {} | Approved: {} | Pending: {}",
            summary.total, summary.approved, summary.unapproved
        );

        let mut sorted = report::sort_desc(&store.records);
        if *pending {
            sorted.retain(|r| !r.approved);
        }

        if sorted.is_empty() {
            info("No records to show.");
            return Ok(());
        }

        let pages = report::total_pages(sorted.len());
        let slice = report::page_slice(&sorted, *page);

        let mut table = Table::new(
            vec![
                Column::new("RECORD", 14),
                Column::new("DATE", 10),
                Column::new("TIME", 8),
                Column::new("USER", 22),
                Column::new("TYPE", 8),
                Column::new("APPROVED", 8),
            ],
            cfg.separator(),
        );
        for rec in slice {
            let approved = if rec.approved { "yes" } else { "no" };
            table.add_row(vec![
                rec.id.to_string(),
                rec.timestamp.format("%Y-%m-%d").to_string(),
                rec.timestamp.format("%H:%M:%S").to_string(),
                rec.user_name.clone(),
                rec.kind.code().to_string(),
                approved.to_string(),
            ]);
        }
        println!();
        print!("{}", table.render());

        println!("\nPage {} of {}   {}", page, pages, render_page_bar(*page, pages));
    }
    Ok(())
}

/// "1 [2] 3 … 9" style page bar with collapsed runs.
fn render_page_bar(current: usize, pages: usize) -> String {
    report::page_bar(current, pages)
        .iter()
        .map(|item| match item {
            PageItem::Page(p) if *p == current => format!("[{p}]"),
            PageItem::Page(p) => p.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_monthly(cfg: &Config) {
    header("Monthly hours (sample data)");
    let mut table = Table::new(
        vec![
            Column::new("MONTH", 10),
            Column::new("TOTAL", 8),
            Column::new("EXPECTED", 8),
        ],
        cfg.separator(),
    );
    for row in report::sample_monthly_hours() {
        table.add_row(vec![
            row.month.to_string(),
            row.total_hours.to_string(),
            row.expected_hours.to_string(),
        ]);
    }
    print!("{}", table.render());
}
