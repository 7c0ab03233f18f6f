//! Text rendering of model trajectories.

use std::io::Write;

use clap::ValueEnum;
use ep_core::Trajectory;

use crate::error::CliResult;

/// Significant digits per value in CSV output.
pub const SIGNIFICANT_DIGITS: usize = 5;
/// Minimum CSV field width, reached by padding fixed-notation values with zeros.
pub const FIELD_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

pub fn write_trajectory<W: Write>(
    trajectory: &Trajectory,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Csv => write_csv(trajectory, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, trajectory)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Header of compartment names, then one line per recorded cycle.
pub fn write_csv<W: Write>(trajectory: &Trajectory, out: &mut W) -> CliResult<()> {
    let header: Vec<&str> = trajectory.keys().collect();
    writeln!(out, "{}", header.join(","))?;

    for index in 0..trajectory.len() {
        let line: Vec<String> = trajectory
            .series()
            .map(|s| format_value(s.values[index]))
            .collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

pub fn format_value(value: f64) -> String {
    pad_fixed(format_general(value, SIGNIFICANT_DIGITS), FIELD_WIDTH)
}

/// `%g`-style formatting with `precision` significant digits.
///
/// Fixed notation is used for decimal exponents in `[-4, precision)` and
/// always keeps one fractional digit; otherwise `d.ddde±XX`.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa, false), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value), true)
    }
}

fn trim_fraction(text: &str, keep_one: bool) -> String {
    let body = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    };
    if keep_one && !body.contains('.') {
        format!("{body}.0")
    } else {
        body.to_string()
    }
}

/// Right-pad fixed-notation text with zeros up to `width`.
fn pad_fixed(text: String, width: usize) -> String {
    if text.contains(['e', 'n', 'i']) || text.len() >= width {
        return text;
    }
    format!("{text:0<width$}")
}
