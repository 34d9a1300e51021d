pub fn format_timestamp(seconds: f64) -> String {
    let minutes = (seconds as u32) / 60;
    let remaining_seconds = (seconds as u32) % 60;
    format!("{:02}:{:02}", minutes, remaining_seconds)
}

// User-facing sizes; the upload limit is configured in whole MiB in practice
pub fn format_bytes(bytes: u64) -> String {
    const MIB: f64 = (1024 * 1024) as f64;
    let mib = bytes as f64 / MIB;
    if mib >= 1.0 {
        if mib.fract() == 0.0 {
            format!("{}MB", mib as u64)
        } else {
            format!("{:.1}MB", mib)
        }
    } else {
        format!("{} bytes", bytes)
    }
}
