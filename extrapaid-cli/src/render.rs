//! Plain-text rendering of an analysis for the terminal.

use extrapaid_core::{ClassifiedTransaction, Summary};
use extrapaid_report::fmt::{money, percent};
use extrapaid_report::Analysis;

const DESC_WIDTH: usize = 44;

pub fn print_analysis(analysis: &Analysis, show_transactions: bool) {
    let s = &analysis.summary;

    match analysis.bank {
        Some(bank) => println!("Bank: {bank}"),
        None => println!("Bank: (not selected)"),
    }
    if analysis.used_fallback {
        println!("Parser: {} (bank layout not recognised, used generic parser)", analysis.parser);
    } else {
        println!("Parser: {}", analysis.parser);
    }
    println!("Transactions: {}\n", s.transactions.len());

    println!("{:<28} {:>16}", "Total Purchases", money(s.purchase_total));
    println!("{:<28} {:>16}", "TOTAL EXTRA Paid", money(s.extra_total));
    println!("{:<28} {:>16}", "EXTRA as % of Purchases", percent(s.extra_pct));

    print_breakdown(s);

    if show_transactions {
        println!("\n## Transactions\n");
        print_transactions(&s.transactions);
    }
}

fn print_breakdown(s: &Summary) {
    println!("\n## EXTRA Breakdown\n");
    if s.extra_breakdown.is_empty() {
        println!("(no extra charges found)");
        return;
    }
    for row in &s.extra_breakdown {
        println!("{:<28} {:>16}", row.extra_type.label(), money(row.total_extra));
    }
}

pub fn print_transactions(txns: &[ClassifiedTransaction]) {
    println!(
        "{:<10}  {:<DESC_WIDTH$}  {:>14}  {}",
        "DATE", "DESCRIPTION", "AMOUNT", "EXTRA TYPE"
    );
    for t in txns {
        let date = t
            .transaction
            .date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "?".to_string());
        let amount = t
            .transaction
            .amount
            .map(money)
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{:<10}  {:<DESC_WIDTH$}  {:>14}  {}",
            date,
            truncate(&t.transaction.description, DESC_WIDTH),
            amount,
            t.extra_label()
        );
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
