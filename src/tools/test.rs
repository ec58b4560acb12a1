#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::SystemTime;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub fn temp_dir() -> PathBuf {
        let name = format!(
            "{}-{}",
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap()
                .as_micros(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        let buf = std::env::temp_dir().join(name);
        fs::create_dir(&buf).unwrap();

        buf
    }

    pub fn write_temp_file(name: &str, content: &[u8]) -> PathBuf {
        let path = temp_dir().join(name);
        fs::write(&path, content).unwrap();

        path
    }
}
