/// Converts a bit count into a human-readable size.
///
/// Counts that are not a whole number of bytes (or are below one byte) are
/// shown in raw bits. Everything else is shown in bytes, KB, MB or GB with
/// two decimal places above one kilobyte.
///
/// # Examples
/// ```
/// use morton_layout::utils::format_bits;
///
/// assert_eq!(format_bits(12), "12 bits");
/// assert_eq!(format_bits(512), "64 bytes");
/// assert_eq!(format_bits(8 * 2048), "2.00 KB");
/// assert_eq!(format_bits(8 * 5_242_880), "5.00 MB");
/// ```
pub fn format_bits(bits: u64) -> String {
    const BYTE: u64 = 8;
    const KB: u64 = BYTE * 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bits {
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b if b >= BYTE && b % BYTE == 0 => format!("{} bytes", b / BYTE),
        _ => format!("{} bits", bits),
    }
}
