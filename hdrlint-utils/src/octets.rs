//! Human formatting of byte sizes, as used in diagnostics.

/// Formats a byte count with thousands separators, e.g. `8,192 bytes`.
///
/// ```
/// use hdrlint_utils::octets::fmt_bytes;
///
/// assert_eq!(fmt_bytes(1), "1 byte");
/// assert_eq!(fmt_bytes(4097), "4,097 bytes");
/// ```
#[must_use]
pub fn fmt_bytes(n: usize) -> String {
    let unit = if n == 1 { "byte" } else { "bytes" };
    format!("{} {unit}", group_thousands(n))
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}
