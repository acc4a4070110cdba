// src/services/report_service.rs
//
// Ledger report rendering: pure string templating over the monthly
// ledger, one page-broken section per month with a category × payment
// type table. The output is a self-contained HTML document staged for
// external PDF conversion/sharing.

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::summary::{format_currency, MonthKey, MonthlyActivity};
use crate::domain::transaction::format_wire_date;
use crate::error::AppResult;
use crate::infrastructure::ExportWorkspace;
use crate::services::summary_service::SummaryService;

const REPORT_STYLE: &str = "
  body { font-family: Arial, sans-serif; margin: 20px; }
  h1, h2, h3 { color: #333; text-align: center; margin-bottom: 10px; }
  .section { margin-bottom: 30px; border: 1px solid #eee; padding: 15px; border-radius: 8px; }
  .subsection {
    margin-top: 20px;
    margin-bottom: 15px;
    padding: 10px;
    border: 1px solid #f9f9f9;
    background-color: #fcfcfc;
    border-radius: 5px;
    page-break-before: always;
  }
  .subsection:first-of-type { page-break-before: auto; }
  table { width: 100%; border-collapse: collapse; margin-top: 10px; }
  th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
  th { background-color: #f2f2f2; }
  .entry { color: #28a745; font-weight: bold; }
  .exit { color: #dc3545; font-weight: bold; }
  .balance { color: #007bff; font-weight: bold; }
  .footer { text-align: center; margin-top: 50px; font-size: 0.8em; color: #777; }
";

pub struct ReportService {
    summary_service: Arc<SummaryService>,
    workspace: Arc<ExportWorkspace>,
}

impl ReportService {
    pub fn new(summary_service: Arc<SummaryService>, workspace: Arc<ExportWorkspace>) -> Self {
        Self {
            summary_service,
            workspace,
        }
    }

    /// Render the current ledger and stage it as an HTML file
    pub fn generate_report_file(&self) -> AppResult<PathBuf> {
        let ledger = self.summary_service.monthly_ledger()?;
        let today = Local::now().date_naive();
        let html = render_monthly_report(&ledger, today);

        let file_name = format!("financial_report_{}.html", today.format("%d-%m-%Y"));
        self.workspace.write_text_file(&file_name, &html)
    }
}

/// Render the monthly ledger as a self-contained HTML document
pub fn render_monthly_report(
    ledger: &BTreeMap<MonthKey, MonthlyActivity>,
    generated_on: NaiveDate,
) -> String {
    let mut html = format!(
        "<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>Financial Report</title>\n\
         <style>{}</style>\n</head>\n<body>\n\
         <h1>Detailed Financial Report</h1>\n\
         <p style=\"text-align: center;\">Generated on: {}</p>\n",
        REPORT_STYLE,
        format_wire_date(generated_on)
    );

    if ledger.is_empty() {
        html.push_str("<p style=\"text-align: center;\">No data available for the report.</p>\n");
    } else {
        // One outer section per year, one page-broken subsection per month
        let mut years: BTreeMap<i32, Vec<(&MonthKey, &MonthlyActivity)>> = BTreeMap::new();
        for (key, month) in ledger {
            years.entry(key.year).or_default().push((key, month));
        }

        for (year, months) in &years {
            html.push_str(&format!("<div class=\"section\">\n<h2>Year: {}</h2>\n", year));

            for (key, month) in months {
                html.push_str(&format!(
                    "<div class=\"subsection\">\n<h3>Month: {} - {}</h3>\n\
                     <p style=\"font-weight: bold;\">Month income: <span class=\"entry\">{}</span></p>\n\
                     <p style=\"font-weight: bold;\">Month expense: <span class=\"exit\">{}</span></p>\n\
                     <p style=\"font-weight: bold;\">Month balance: <span class=\"balance\">{}</span></p>\n",
                    key.month_name(),
                    key.year,
                    format_currency(month.totals.income),
                    format_currency(month.totals.expense),
                    format_currency(month.totals.balance()),
                ));

                html.push_str(
                    "<h4>Breakdown by category and payment type</h4>\n<table>\n<thead>\n<tr>\
                     <th>Category</th><th>Payment type</th><th>Income</th><th>Expense</th>\
                     <th>Balance</th></tr>\n</thead>\n<tbody>\n",
                );

                if month.lines.is_empty() {
                    html.push_str(
                        "<tr><td colspan=\"5\">No detail available for this month.</td></tr>\n",
                    );
                } else {
                    for ((category, payment_type), line) in &month.lines {
                        html.push_str(&format!(
                            "<tr><td>{}</td><td>{}</td><td class=\"entry\">{}</td>\
                             <td class=\"exit\">{}</td><td class=\"balance\">{}</td></tr>\n",
                            escape_html(category),
                            payment_type,
                            format_currency(line.income),
                            format_currency(line.expense),
                            format_currency(line.balance()),
                        ));
                    }
                }

                html.push_str("</tbody>\n</table>\n</div>\n");
            }

            html.push_str("</div>\n");
        }
    }

    html.push_str(
        "<div class=\"footer\">\n<p>Report generated by TrackHub.</p>\n</div>\n</body>\n</html>\n",
    );

    html
}

/// Minimal escaping for user-entered labels landing in the HTML
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
