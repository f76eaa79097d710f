//! Output formatters for company results

use anyhow::Result;
use colored::*;
use costcodes_core::{CompanyResults, Record};
use std::fmt::{self, Write};

/// Pretty-printed JSON document, 2-space indentation
pub fn render_json(results: &CompanyResults) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(results)?))
}

/// JavaScript constant the web app embeds, one record per line at 4-space indent
pub fn render_js(results: &CompanyResults) -> Result<String> {
    let mut out = String::from("const COST_CODES_BY_COMPANY = {\n");
    let companies: Vec<_> = results.iter().collect();

    for (i, (company, records)) in companies.iter().enumerate() {
        let name = serde_json::to_string(company)?;
        if records.is_empty() {
            write!(out, "    {}: []", name)?;
        } else {
            writeln!(out, "    {}: [", name)?;
            for (j, record) in records.iter().enumerate() {
                let line = match record {
                    Record::Code(code) => serde_json::to_string(code)?,
                    Record::Described(cc) => format!(
                        "{{\"code\": {}, \"description\": {}}}",
                        serde_json::to_string(&cc.code)?,
                        serde_json::to_string(&cc.description)?
                    ),
                };
                let sep = if j + 1 < records.len() { "," } else { "" };
                writeln!(out, "        {}{}", line, sep)?;
            }
            write!(out, "    ]")?;
        }
        writeln!(out, "{}", if i + 1 < companies.len() { "," } else { "" })?;
    }

    out.push_str("};\n");
    Ok(out)
}

/// Human-readable listing grouped by company
pub fn render_human(results: &CompanyResults) -> Result<String> {
    let mut out = String::new();
    write_human(&mut out, results)?;
    Ok(out)
}

fn write_human(out: &mut String, results: &CompanyResults) -> fmt::Result {
    if results.is_empty() {
        return writeln!(out, "{}", "No company files found".yellow().bold());
    }

    for (company, records) in results.iter() {
        writeln!(out, "{} {}", "Company:".bold(), company.cyan().bold())?;
        if records.is_empty() {
            writeln!(out, "  {}", "(no cost codes)".bright_black())?;
        }
        for record in records {
            match record {
                Record::Code(code) => writeln!(out, "  {}", code.yellow())?,
                Record::Described(cc) => {
                    writeln!(out, "  {:<12} {}", cc.code.yellow(), cc.description)?
                }
            }
        }
        writeln!(out)?;
    }

    let summary = results.summary();
    writeln!(out, "{}", "Summary:".bold().underline())?;
    for (company, count) in &summary.companies {
        writeln!(out, "  {} {}", format!("{}:", company).bold(), count)?;
    }
    writeln!(out, "  {} {}", "Total:".green().bold(), summary.total)
}
