// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Display formatting for the numbers the dashboard renders.

/// Formats a ratio in `[0, 1]` as a percentage with two decimals.
pub fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Formats a count with thousands separators.
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a dollar amount with thousands separators and two decimals.
pub fn usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let whole = abs.trunc() as u64;
    let cents = (abs.fract() * 100.0).round() as u64;
    // Rounding the fractional part can carry into the next dollar.
    if cents == 100 {
        format!("{sign}${}.00", count(whole + 1))
    } else {
        format!("{sign}${}.{cents:02}", count(whole))
    }
}

/// Formats a change in dollars with an explicit sign, for the movers card.
pub fn signed_usd(change: f64) -> String {
    if change >= 0.0 {
        format!("+{}", usd(change))
    } else {
        usd(change)
    }
}
