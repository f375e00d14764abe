// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;
const PB: f64 = TB * 1024.0;

/// Format a byte count in binary units
///
/// # Examples
///
/// ```
/// assert_eq!(units::format_size(512), "512B");
/// assert_eq!(units::format_size(3 * 1024 * 1024), "3.0MiB");
/// ```
pub fn format_size(size: u64) -> String {
    let size = size as f64;
    if size >= PB {
        format!("{:.1}PiB", size / PB)
    } else if size >= TB {
        format!("{:.1}TiB", size / TB)
    } else if size >= GB {
        format!("{:.1}GiB", size / GB)
    } else if size >= MB {
        format!("{:.1}MiB", size / MB)
    } else if size >= KB {
        format!("{:.1}KiB", size / KB)
    } else {
        format!("{}B", size)
    }
}

/// Format a throughput given in bytes per second
pub fn format_rate(bytes_per_second: f64) -> String {
    format!(
        "{:.2} Mbytes/sec ({:.2} Gbytes/sec)",
        bytes_per_second / MB,
        bytes_per_second / GB
    )
}
