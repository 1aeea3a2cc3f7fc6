use crate::types::record::ScoredRecord;

/// Renders the scored table as aligned plain text. The measure_name
/// column only appears when at least one record carries a name.
pub fn to_table(scored: &[ScoredRecord]) -> String {
    let with_names = scored.iter().any(|record| record.measure_name.is_some());

    let mut header = vec!["measure_id"];
    if with_names {
        header.push("measure_name");
    }
    header.extend([
        "completeness_rate",
        "mapping_coverage",
        "variance_ratio",
        "cutpoint_shift",
        "measure_weight",
        "ccs",
        "eav",
        "cpr",
        "wm",
        "shock_index",
        "risk_tier",
    ]);

    let mut rows: Vec<Vec<String>> =
        vec![header.iter().map(|column| column.to_string()).collect()];
    for record in scored {
        let mut row = vec![record.measure_id.clone()];
        if with_names {
            row.push(record.measure_name.clone().unwrap_or_default());
        }
        row.extend([
            format!("{}", record.completeness_rate),
            format!("{}", record.mapping_coverage),
            format!("{}", record.variance_ratio),
            format!("{}", record.cutpoint_shift),
            format!("{}", record.measure_weight),
            format!("{:.4}", record.ccs),
            format!("{:.4}", record.eav),
            format!("{:.4}", record.cpr),
            format!("{:.4}", record.wm),
            format!("{:.4}", record.shock_index),
            record.risk_tier.to_string(),
        ]);
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].len())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}
