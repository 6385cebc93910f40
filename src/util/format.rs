//! pt-BR display formatting for the tables and cards.
//!
//! Timestamps arrive as ISO-8601 strings and are re-arranged textually;
//! no timezone math happens client-side.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `2026-08-10T08:30:00...` → `10/08/2026 08:30`. Inputs that do not look
/// like an ISO timestamp come back unchanged.
pub fn format_datetime_br(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return iso.to_owned();
    }
    let hhmm = if time.len() >= 5 { &time[..5] } else { time };
    format!("{day}/{month}/{year} {hhmm}")
}

/// Reais with thousands dots and a comma decimal: `1234.5` → `R$ 1.234,50`.
pub fn format_currency_brl(valor: f64) -> String {
    let negative = valor < 0.0;
    let cents = (valor.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}
